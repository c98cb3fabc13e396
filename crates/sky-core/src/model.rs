//! The delivery-network domain model.
//!
//! Hubs and connections are read-only inputs created outside the simulation
//! (network administration); shipments are the mutable entities the movement
//! engine advances tick by tick.

use std::fmt;

use crate::geo::GeoPoint;
use crate::ids::{HubCode, ShipmentId};
use crate::time::Tick;

// ── Hub ───────────────────────────────────────────────────────────────────────

/// A fixed geographic node of the delivery network.
///
/// Immutable for the simulation's purposes: the movement engine and route
/// graph only ever read hubs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hub {
    pub code: HubCode,
    pub city: String,
    pub country: String,
    pub position: GeoPoint,
    /// Offset from UTC in whole hours, for display purposes only.
    pub tz_offset_hours: i8,
}

// ── HubConnection ─────────────────────────────────────────────────────────────

/// A weighted lane between two hubs.
///
/// Connections are stored directed (`from` → `to`) but the route graph treats
/// every connection as traversable in both directions with the same weight.
/// Parallel connections between the same pair are permitted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HubConnection {
    pub from: HubCode,
    pub to: HubCode,
    /// Travel cost.  Dimensionless; only relative magnitudes matter.
    pub weight: u32,
}

impl HubConnection {
    pub fn new(from: impl Into<HubCode>, to: impl Into<HubCode>, weight: u32) -> Self {
        Self { from: from.into(), to: to.into(), weight }
    }
}

// ── ShipmentStatus ────────────────────────────────────────────────────────────

/// Lifecycle state of a shipment.
///
/// Transitions are one-directional:
///
/// ```text
/// Queued ──▶ InTransit ──▶ Delivered (terminal)
/// ```
///
/// The movement engine never fetches `Delivered` shipments, so a delivered
/// shipment is never mutated again.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipmentStatus {
    /// Created, waiting at the origin hub.
    Queued,
    /// Moving along its resolved route.
    InTransit,
    /// Arrived at the destination hub.  Terminal.
    Delivered,
}

impl ShipmentStatus {
    /// `true` once the shipment can never change again.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ShipmentStatus::Delivered)
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShipmentStatus::Queued    => "QUEUED",
            ShipmentStatus::InTransit => "IN_TRANSIT",
            ShipmentStatus::Delivered => "DELIVERED",
        };
        f.write_str(s)
    }
}

// ── Shipment ──────────────────────────────────────────────────────────────────

/// A shipment travelling its resolved multi-hub route.
///
/// The `route` is computed once at creation time by the pathfinder and never
/// recomputed mid-transit.  `progress_percent` covers the whole route in
/// leg-units (not physical distance) and is monotonically non-decreasing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shipment {
    pub id: ShipmentId,

    /// Human-readable cargo label (e.g. a product name).
    pub label: String,
    pub consumer_name: String,
    pub delivery_address: String,
    /// Container identifier in the `CONT-########` format.
    pub container_id: String,

    pub origin: HubCode,
    pub destination: HubCode,
    /// Resolved hub sequence, origin first, destination last.  Length ≥ 2
    /// except for the degenerate origin == destination case.
    pub route: Vec<HubCode>,

    pub status: ShipmentStatus,
    /// 0–100.  Fraction of the route completed, in leg-units.
    pub progress_percent: u8,
    /// Last interpolated map position.
    pub position: GeoPoint,

    pub created_tick: Tick,
}

impl Shipment {
    /// Number of legs in the resolved route.
    #[inline]
    pub fn legs(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}
