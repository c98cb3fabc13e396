//! CSV network loader.
//!
//! # CSV formats
//!
//! Hubs, one row per hub:
//!
//! ```csv
//! code,city,country,latitude,longitude,tz_offset_hours
//! RTM,Rotterdam,Netherlands,51.95,4.14,1
//! SIN,Singapore,Singapore,1.26,103.84,8
//! ```
//!
//! Connections, one row per undirected lane:
//!
//! ```csv
//! from_hub,to_hub,weight
//! RTM,SIN,9
//! ```
//!
//! Rows that fail to parse abort the load with [`RoutingError::Parse`];
//! structurally valid rows with blank hub codes are passed through and left
//! for [`RouteGraph::from_connections`][crate::RouteGraph::from_connections]
//! to skip at build time.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sky_core::{GeoPoint, Hub, HubCode, HubConnection};

use crate::RoutingError;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct HubRecord {
    code:            String,
    city:            String,
    country:         String,
    latitude:        f32,
    longitude:       f32,
    tz_offset_hours: i8,
}

#[derive(Deserialize)]
struct ConnectionRecord {
    from_hub: String,
    to_hub:   String,
    weight:   u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load hubs from a CSV file.
pub fn load_hubs_csv(path: &Path) -> Result<Vec<Hub>, RoutingError> {
    let file = std::fs::File::open(path).map_err(RoutingError::Io)?;
    load_hubs_reader(file)
}

/// Like [`load_hubs_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
pub fn load_hubs_reader<R: Read>(reader: R) -> Result<Vec<Hub>, RoutingError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut hubs = Vec::new();

    for result in csv_reader.deserialize::<HubRecord>() {
        let row = result.map_err(|e| RoutingError::Parse(e.to_string()))?;
        hubs.push(Hub {
            code:            HubCode::from(row.code),
            city:            row.city,
            country:         row.country,
            position:        GeoPoint::new(row.latitude, row.longitude),
            tz_offset_hours: row.tz_offset_hours,
        });
    }

    Ok(hubs)
}

/// Load hub connections from a CSV file.
pub fn load_connections_csv(path: &Path) -> Result<Vec<HubConnection>, RoutingError> {
    let file = std::fs::File::open(path).map_err(RoutingError::Io)?;
    load_connections_reader(file)
}

/// Like [`load_connections_csv`] but accepts any `Read` source.
pub fn load_connections_reader<R: Read>(reader: R) -> Result<Vec<HubConnection>, RoutingError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut connections = Vec::new();

    for result in csv_reader.deserialize::<ConnectionRecord>() {
        let row = result.map_err(|e| RoutingError::Parse(e.to_string()))?;
        connections.push(HubConnection::new(row.from_hub, row.to_hub, row.weight));
    }

    Ok(connections)
}
