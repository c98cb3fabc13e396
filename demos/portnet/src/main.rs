//! portnet — smallest end-to-end demo of the skylink simulator.
//!
//! Runs seeded demand over an eight-port network for a few hundred ticks and
//! prints a lifecycle summary.  Set `RUST_LOG=info` to watch individual
//! orders, departures, and deliveries stream by.

mod network;

use std::time::Instant;

use anyhow::Result;

use sky_core::{ShipmentStatus, SimConfig, Tick};
use sky_movement::{HubDirectory, InMemoryShipmentStore, ShipmentStore, TickSummary};
use sky_routing::DijkstraPathfinder;
use sky_sim::{SimBuilder, SimObserver};

use network::build_network;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const TOTAL_TICKS: u64 = 300;

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tally {
    orders:    usize,
    delivered: usize,
    skips:     usize,
}

impl SimObserver for Tally {
    fn on_order(&mut self, _shipment: &sky_core::Shipment) {
        self.orders += 1;
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.delivered += summary.delivered;
        self.skips += summary.coordinate_skips;
        if tick.0.is_multiple_of(50) && tick > Tick::ZERO {
            println!(
                "  {tick}: {} orders so far, {} delivered",
                self.orders, self.delivered
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== portnet — skylink delivery simulator ===");

    let (hubs, connections) = build_network()?;
    println!("network: {} hubs, {} lanes", hubs.len(), connections.len());

    let config = SimConfig {
        total_ticks:             TOTAL_TICKS,
        seed:                    SEED,
        // One new order roughly every 10 ticks, movement every tick.
        order_interval_ticks:    10,
        movement_interval_ticks: 1,
        consumer_interval_ticks: 5,
        ..SimConfig::default()
    };

    let mut sim = SimBuilder::new(config, InMemoryShipmentStore::new(), DijkstraPathfinder)
        .hubs(HubDirectory::new(hubs))
        .connections(connections)
        .build()?;

    let mut tally = Tally::default();
    let started = Instant::now();
    sim.run(&mut tally);
    let elapsed = started.elapsed();

    let store = &sim.engine.store;
    let queued = store.list_by_status(ShipmentStatus::Queued).len();
    let in_transit = store.list_by_status(ShipmentStatus::InTransit).len();
    let delivered = store.list_by_status(ShipmentStatus::Delivered).len();

    println!();
    println!("ran {TOTAL_TICKS} ticks in {elapsed:.2?}");
    println!("consumers registered: {}", sim.orders.consumers().len());
    println!("orders created:       {}", tally.orders);
    println!("queued / in transit / delivered: {queued} / {in_transit} / {delivered}");
    if tally.skips > 0 {
        println!("coordinate updates skipped: {}", tally.skips);
    }

    // Every shipment the tally saw must be accounted for in the store.
    assert_eq!(queued + in_transit + delivered, tally.orders);
    assert_eq!(delivered, tally.delivered);

    Ok(())
}
