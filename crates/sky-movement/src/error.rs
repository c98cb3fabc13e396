//! Movement-subsystem error types.

use thiserror::Error;

use sky_core::HubCode;

/// A rejected write from a [`ShipmentStore`][crate::ShipmentStore].
///
/// Treated as per-shipment and non-fatal by the engine: logged, then the
/// tick proceeds with the next shipment.
#[derive(Debug, Error)]
#[error("shipment store rejected write: {0}")]
pub struct StoreError(pub String);

/// Errors produced by `sky-movement`.
#[derive(Debug, Error)]
pub enum MovementError {
    /// A route references a hub the lookup collaborator no longer knows.
    /// Soft-fail: the shipment's coordinate update is skipped for the tick.
    #[error("hub {0} cannot be resolved")]
    UnresolvedHub(HubCode),

    /// A route too short to interpolate along (fewer than 2 hubs).
    #[error("route has fewer than 2 hubs, cannot interpolate")]
    DegenerateRoute,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type MovementResult<T> = Result<T, MovementError>;
