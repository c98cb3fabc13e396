//! Routing-subsystem error type.

use thiserror::Error;

use sky_core::HubCode;

/// Errors produced by `sky-routing`.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: HubCode, to: HubCode },

    #[error("hub {0} not found in route graph")]
    UnknownHub(HubCode),

    #[error("network CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
