//! Fluent builder for constructing a [`Sim`].

use sky_core::{Hub, HubConnection, SimConfig};
use sky_movement::{HubDirectory, MovementEngine, ShipmentStore};
use sky_orders::OrderGenerator;
use sky_routing::{Pathfinder, RouteGraph};

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<S, P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, cadences, step size
/// - `S: ShipmentStore` — the injected shipment store
/// - `P: Pathfinder` — the routing algorithm (e.g. [`sky_routing::DijkstraPathfinder`])
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                  |
/// |-------------------|------------------------------------------|
/// | `.hubs(v)`        | Empty directory (orders stay `NotReady`) |
/// | `.connections(v)` | Empty graph (every query is "no route")  |
pub struct SimBuilder<S: ShipmentStore, P: Pathfinder> {
    config: SimConfig,
    store: S,
    pathfinder: P,
    hubs: Option<HubDirectory>,
    connections: Option<Vec<HubConnection>>,
}

impl<S: ShipmentStore, P: Pathfinder> SimBuilder<S, P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, store: S, pathfinder: P) -> Self {
        Self {
            config,
            store,
            pathfinder,
            hubs: None,
            connections: None,
        }
    }

    /// Supply the hub directory.
    pub fn hubs(mut self, hubs: HubDirectory) -> Self {
        self.hubs = Some(hubs);
        self
    }

    /// Convenience: build the directory from a plain hub list.
    pub fn hub_list(self, hubs: impl IntoIterator<Item = Hub>) -> Self {
        self.hubs(HubDirectory::new(hubs))
    }

    /// Supply the connection set the route graph is built from.
    pub fn connections(mut self, connections: Vec<HubConnection>) -> Self {
        self.connections = Some(connections);
        self
    }

    /// Validate the configuration, build the route graph, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S, P>> {
        self.config.validate()?;

        let hubs = self.hubs.unwrap_or_default();
        let graph = RouteGraph::from_connections(self.connections.unwrap_or_default());

        // Dangling references are a data-integrity smell, not a build error:
        // routing still works, but affected shipments will skip coordinate
        // updates mid-transit.
        for code in graph.hubs() {
            if hubs.require(code).is_err() {
                tracing::warn!(hub = %code, "connection references a hub with no directory entry");
            }
        }

        let engine = MovementEngine::new(self.store, self.config.step_percent);
        let orders = OrderGenerator::new(
            self.pathfinder,
            self.config.seed,
            self.config.max_consumers,
        );

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            graph,
            hubs,
            engine,
            orders,
        })
    }
}
