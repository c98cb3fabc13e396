//! The movement engine: per-tick status transitions and position updates.

use sky_core::{ShipmentStatus, Tick};

use crate::interp::route_position;
use crate::store::{HubLookup, ShipmentStore};
use crate::MovementError;

/// Counts of what a single movement pass did — returned to the orchestrator
/// and surfaced through its observer hooks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Shipments flipped from `Queued` to `InTransit`.
    pub departed: usize,
    /// Shipments whose progress advanced (still `InTransit` afterwards).
    pub advanced: usize,
    /// Shipments that reached 100 % and became `Delivered`.
    pub delivered: usize,
    /// Coordinate updates skipped because a route hub could not be resolved.
    pub coordinate_skips: usize,
    /// Writes the store rejected (logged, shipment left for a later tick).
    pub failed_saves: usize,
}

/// Advances every eligible shipment by exactly one simulation step per call.
///
/// # Type parameter
///
/// `S` is the injected [`ShipmentStore`].  Hub resolution is passed per call
/// so the engine never holds the (shared, read-only) hub data itself.
///
/// # Single-writer discipline
///
/// `tick` takes `&mut self`: overlapping passes over the same shipment set
/// are unrepresentable, which is what keeps progress monotonic.  Within a
/// pass, shipments are processed independently in ascending id order.
pub struct MovementEngine<S: ShipmentStore> {
    /// The injected shipment store.
    pub store: S,

    /// Progress percentage added per advancement pass.
    step_percent: u8,
}

impl<S: ShipmentStore> MovementEngine<S> {
    pub fn new(store: S, step_percent: u8) -> Self {
        Self { store, step_percent }
    }

    pub fn step_percent(&self) -> u8 {
        self.step_percent
    }

    /// Run one full movement pass.
    ///
    /// Two independent sub-passes per invocation:
    ///
    /// 1. **Departures** — every `Queued` shipment becomes `InTransit` with
    ///    its progress untouched.  The in-transit set is snapshotted *before*
    ///    this pass, so a shipment that departs this tick starts advancing on
    ///    the next one.
    /// 2. **Advancement** — every already-in-transit shipment gains
    ///    `step_percent`, is re-interpolated along its route, and is
    ///    delivered (clamped to exactly 100) once it crosses the line.
    ///
    /// No condition aborts the pass; per-shipment failures are logged and
    /// counted in the returned [`TickSummary`].
    pub fn tick<H: HubLookup>(&mut self, hubs: &H, now: Tick) -> TickSummary {
        let mut summary = TickSummary::default();

        let in_transit = self.store.list_by_status(ShipmentStatus::InTransit);

        // ── Departure pass ────────────────────────────────────────────────
        for mut shipment in self.store.list_by_status(ShipmentStatus::Queued) {
            shipment.status = ShipmentStatus::InTransit;
            tracing::info!(
                shipment = %shipment.id,
                label = %shipment.label,
                origin = %shipment.origin,
                "shipment has left its origin hub"
            );
            match self.store.save(shipment) {
                Ok(()) => summary.departed += 1,
                Err(e) => {
                    tracing::warn!(error = %e, tick = %now, "departure not persisted");
                    summary.failed_saves += 1;
                }
            }
        }

        // ── Advancement pass ──────────────────────────────────────────────
        for mut shipment in in_transit {
            let new_progress = shipment.progress_percent.saturating_add(self.step_percent);

            if new_progress >= 100 {
                shipment.progress_percent = 100;
                shipment.status = ShipmentStatus::Delivered;

                // Final position is definitionally the destination hub; set
                // it explicitly so a skipped interpolation can't leave a
                // stale mid-route coordinate behind.
                match shipment.route.last().and_then(|code| hubs.hub(code)) {
                    Some(dest) => shipment.position = dest.position,
                    None => {
                        tracing::warn!(
                            shipment = %shipment.id,
                            destination = %shipment.destination,
                            "destination hub unresolved, keeping last position"
                        );
                        summary.coordinate_skips += 1;
                    }
                }

                tracing::info!(
                    shipment = %shipment.id,
                    label = %shipment.label,
                    destination = %shipment.destination,
                    "shipment delivered"
                );
                summary.delivered += 1;
            } else {
                shipment.progress_percent = new_progress;

                match route_position(&shipment.route, new_progress, hubs) {
                    Ok(position) => shipment.position = position,
                    Err(MovementError::UnresolvedHub(code)) => {
                        // Soft-fail: progress still advances, the marker just
                        // stays where it was until the hub resolves again.
                        tracing::warn!(
                            shipment = %shipment.id,
                            hub = %code,
                            "route hub unresolved, coordinate update skipped"
                        );
                        summary.coordinate_skips += 1;
                    }
                    Err(e) => {
                        tracing::warn!(
                            shipment = %shipment.id,
                            error = %e,
                            "coordinate update skipped"
                        );
                        summary.coordinate_skips += 1;
                    }
                }
                summary.advanced += 1;
            }

            if let Err(e) = self.store.save(shipment) {
                tracing::warn!(error = %e, tick = %now, "advancement not persisted");
                summary.failed_saves += 1;
            }
        }

        summary
    }
}
