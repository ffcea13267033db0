//! Crate error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid scenario {name:?}: {reason}")]
    Validation { name: String, reason: String },
}

/// Shorthand result type for this crate.
pub type TrafficResult<T> = Result<T, TrafficError>;
