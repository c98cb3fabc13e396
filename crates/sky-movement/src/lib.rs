//! `sky-movement` — shipment movement state and per-tick advancement.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                         |
//! |------------|------------------------------------------------------------------|
//! | [`store`]  | `ShipmentStore` / `HubLookup` traits + in-memory implementations |
//! | [`interp`] | Multi-leg route position interpolation                           |
//! | [`engine`] | `MovementEngine<S>` — the tick advancement passes                |
//! | [`error`]  | `MovementError`, `StoreError`, `MovementResult<T>`               |
//!
//! # Movement model (percent-per-tick)
//!
//! Shipments advance on a fixed clock tick rather than from real tracking
//! input:
//!
//! 1. A freshly created shipment waits at its origin hub as `Queued`.
//! 2. The first movement pass that sees it flips it to `InTransit` (progress
//!    stays 0 for that tick — "leaving the origin hub").
//! 3. Every following pass adds `step_percent` to its progress and
//!    re-interpolates its map position along the legs of its resolved route.
//! 4. At progress ≥ 100 it is clamped to exactly 100, marked `Delivered`, and
//!    pinned to the destination hub's coordinate.  `Delivered` is terminal.
//!
//! Nothing in a pass is globally fatal: a rejected save or an unresolvable
//! hub affects only that shipment, and only for that tick.

pub mod engine;
pub mod error;
pub mod interp;
pub mod store;

#[cfg(test)]
mod tests;

pub use engine::{MovementEngine, TickSummary};
pub use error::{MovementError, MovementResult, StoreError};
pub use interp::route_position;
pub use store::{HubDirectory, HubLookup, InMemoryShipmentStore, ShipmentStore};
