//! Crate error type.

use thiserror::Error;

use lift_core::{ElevatorId, Tick};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("floor {floor} outside building (valid: 0..{floors_count})")]
    FloorOutOfRange { floor: i32, floors_count: usize },

    #[error("unknown elevator {0}")]
    UnknownElevator(ElevatorId),

    /// A violated structural invariant.  Fatal: the current `step` call is
    /// aborted and no partial tick output is returned.
    #[error("simulation invariant violated at {tick}: {reason}")]
    InvariantViolation { tick: Tick, reason: String },
}

/// Shorthand result type for this crate.
pub type SimResult<T> = Result<T, SimError>;
