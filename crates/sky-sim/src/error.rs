use sky_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
