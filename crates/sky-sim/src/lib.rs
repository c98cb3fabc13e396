//! `sky-sim` — tick loop orchestrator for the skylink simulator.
//!
//! # Per-tick cadences
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Consumers — register a synthetic customer (every consumer_interval_ticks,
//!                 until max_consumers).
//!   ② Orders    — create a queued shipment with a freshly resolved route
//!                 (every order_interval_ticks).
//!   ③ Movement  — run the movement engine's departure + advancement passes
//!                 (every movement_interval_ticks).
//! ```
//!
//! # Single-flight discipline
//!
//! The loop drives everything through `&mut self`, so a tick can never
//! overlap the previous one — two concurrent passes over the same shipment
//! set (which would double-advance progress) are unrepresentable.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sky_core::SimConfig;
//! use sky_movement::{HubDirectory, InMemoryShipmentStore};
//! use sky_routing::DijkstraPathfinder;
//! use sky_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, InMemoryShipmentStore::new(), DijkstraPathfinder)
//!     .hubs(HubDirectory::new(hubs))
//!     .connections(connections)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
