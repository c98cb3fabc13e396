//! `sky-core` — foundational types for the `skylink` delivery-network simulator.
//!
//! This crate is a dependency of every other `sky-*` crate.  It intentionally
//! has no `sky-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `HubCode`, `ShipmentId`, `ConsumerId`                 |
//! | [`geo`]      | `GeoPoint`, linear interpolation, haversine distance  |
//! | [`time`]     | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`model`]    | `Hub`, `HubConnection`, `Shipment`, `ShipmentStatus`  |
//! | [`rng`]      | `SimRng` (seeded, deterministic)                      |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod model;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{ConsumerId, HubCode, ShipmentId};
pub use model::{Hub, HubConnection, Shipment, ShipmentStatus};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
