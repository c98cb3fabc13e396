//! The `Sim` struct and its tick loop.

use sky_core::{SimClock, SimConfig, Tick};
use sky_movement::{HubDirectory, MovementEngine, ShipmentStore, TickSummary};
use sky_orders::{OrderError, OrderGenerator};
use sky_routing::{ConnectionSource, Pathfinder, RouteGraph};

use crate::SimObserver;

/// The main simulation runner.
///
/// `Sim<S, P>` holds all simulation state and drives the three cadences —
/// consumer registration, order creation, and movement — from a single
/// integer tick counter.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: ShipmentStore, P: Pathfinder> {
    /// Global configuration (total ticks, seed, cadences, step size).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to wall time.
    pub clock: SimClock,

    /// The connection graph, built once and read-only between rebuilds.
    pub graph: RouteGraph,

    /// Hub data, administered externally; the simulation only reads it.
    pub hubs: HubDirectory,

    /// Movement engine owning the injected shipment store.
    pub engine: MovementEngine<S>,

    /// Order and consumer generation.
    pub orders: OrderGenerator<P>,
}

impl<S: ShipmentStore, P: Pathfinder> Sim<S, P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            let now = self.clock.current_tick;
            self.process_tick(now, observer);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.process_tick(now, observer);
            self.clock.advance();
        }
    }

    /// Replace the connection graph from a fresh connection set.
    ///
    /// The whole graph value is swapped in one assignment between ticks —
    /// queries never observe a partially rebuilt structure.  Routes already
    /// stored on in-flight shipments are deliberately left untouched.
    pub fn rebuild_graph(&mut self, source: &impl ConnectionSource) {
        self.graph = RouteGraph::from_source(source);
        tracing::info!(hubs = self.graph.hub_count(), "route graph rebuilt");
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        observer.on_tick_start(now);

        // ── Cadence 1: consumer registration ──────────────────────────────
        if now.is_due(self.config.consumer_interval_ticks) {
            self.orders.spawn_consumer();
        }

        // ── Cadence 2: order creation ─────────────────────────────────────
        if now.is_due(self.config.order_interval_ticks) {
            match self.orders.generate_order(&self.hubs, &self.graph, now) {
                Ok(shipment) => {
                    observer.on_order(&shipment);
                    if let Err(e) = self.engine.store.save(shipment) {
                        tracing::warn!(error = %e, tick = %now, "new order not persisted");
                    }
                }
                Err(OrderError::NotReady(reason)) => {
                    tracing::debug!(tick = %now, reason, "skipping order");
                }
                Err(OrderError::Routing(e)) => {
                    tracing::warn!(tick = %now, error = %e, "skipping unroutable order");
                }
            }
        }

        // ── Cadence 3: movement ───────────────────────────────────────────
        let summary = if now.is_due(self.config.movement_interval_ticks) {
            self.engine.tick(&self.hubs, now)
        } else {
            TickSummary::default()
        };

        observer.on_tick_end(now, &summary);
    }
}
