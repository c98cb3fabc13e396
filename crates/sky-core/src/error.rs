//! Framework error type.
//!
//! Sub-crates define their own error enums (`RoutingError`, `MovementError`,
//! …) and keep them separate; `CoreError` covers the concerns that belong to
//! this crate itself — configuration and parsing of core types.

use thiserror::Error;

use crate::HubCode;

/// The top-level error type for `sky-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("hub {0} not found")]
    HubNotFound(HubCode),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `sky-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
