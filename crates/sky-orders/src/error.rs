//! Order-generation error type.

use thiserror::Error;

use sky_routing::RoutingError;

/// Errors produced by `sky-orders`.
///
/// None of these are fatal to the tick loop: a failed order is skipped and
/// the generator tries again on its next cadence.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The network is not populated enough to create an order yet.
    #[error("waiting for prerequisites: {0}")]
    NotReady(&'static str),

    /// The chosen hub pair has no route between them.
    #[error("routing failed: {0}")]
    Routing(#[from] RoutingError),
}

pub type OrderResult<T> = Result<T, OrderError>;
