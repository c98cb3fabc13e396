//! The demo's hub network, embedded as CSV fixtures.
//!
//! Eight container-port hubs with lane weights loosely proportional to
//! sailing time.  The network is deliberately not complete: RTM—SIN traffic,
//! for example, has to be routed through intermediate hubs.

use std::io::Cursor;

use sky_core::{Hub, HubConnection};
use sky_routing::{load_connections_reader, load_hubs_reader, RoutingError};

const HUBS_CSV: &str = "\
code,city,country,latitude,longitude,tz_offset_hours
RTM,Rotterdam,Netherlands,51.95,4.14,1
HAM,Hamburg,Germany,53.54,9.97,1
NYC,New York,United States,40.67,-74.04,-5
SSZ,Santos,Brazil,-23.98,-46.29,-3
DXB,Dubai,United Arab Emirates,25.27,55.28,4
SIN,Singapore,Singapore,1.26,103.84,8
SHA,Shanghai,China,31.35,121.67,8
LAX,Los Angeles,United States,33.73,-118.26,-8
";

const CONNECTIONS_CSV: &str = "\
from_hub,to_hub,weight
RTM,HAM,1
RTM,NYC,8
RTM,DXB,11
HAM,NYC,9
NYC,SSZ,10
NYC,LAX,7
DXB,SIN,6
SIN,SHA,4
SHA,LAX,12
SSZ,DXB,14
";

/// Load the embedded fixture network.
pub fn build_network() -> Result<(Vec<Hub>, Vec<HubConnection>), RoutingError> {
    let hubs = load_hubs_reader(Cursor::new(HUBS_CSV))?;
    let connections = load_connections_reader(Cursor::new(CONNECTIONS_CSV))?;
    Ok((hubs, connections))
}
