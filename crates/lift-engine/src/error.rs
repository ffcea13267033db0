//! The engine's error contract.
//!
//! Four kinds, fixed by the external protocol.  `kind()` returns the stable
//! wire identifier a transport maps to its own status codes; the `Display`
//! text is the human-readable `error` payload.

use thiserror::Error;

use lift_sim::SimError;
use lift_traffic::TrafficError;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed input: unknown elevator id, out-of-range floor,
    /// non-positive tick count, …  Never mutates state.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The addressed entity does not exist at query time.
    #[error("not found: {0}")]
    NotFound(String),

    /// `next_traffic_round` called past the last configured scenario.
    #[error("no more traffic scenarios")]
    NoMoreScenarios,

    /// Invariant violation or unexpected state; a correct deployment never
    /// sees this.
    #[error("internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Stable wire identifier for this error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::InvalidArgument(_) => "invalid_argument",
            EngineError::NotFound(_)        => "not_found",
            EngineError::NoMoreScenarios    => "no_more_scenarios",
            EngineError::Internal(_)        => "internal",
        }
    }
}

impl From<SimError> for EngineError {
    fn from(err: SimError) -> Self {
        match err {
            // An unknown elevator id is a malformed command input, same as
            // an out-of-range floor.
            SimError::FloorOutOfRange { .. } | SimError::UnknownElevator(_) => {
                EngineError::InvalidArgument(err.to_string())
            }
            SimError::Config(_) | SimError::InvariantViolation { .. } => {
                EngineError::Internal(err.to_string())
            }
        }
    }
}

impl From<TrafficError> for EngineError {
    fn from(err: TrafficError) -> Self {
        EngineError::InvalidArgument(err.to_string())
    }
}

/// Shorthand result type for this crate.
pub type EngineResult<T> = Result<T, EngineError>;
