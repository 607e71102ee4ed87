//! Engine error type

use oscsim_types::InvalidParameterError;
use thiserror::Error;

/// Errors surfaced by the simulation engine
#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = SimError> = std::result::Result<T, E>;
