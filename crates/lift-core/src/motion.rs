//! Closed enums describing elevator motion.
//!
//! `RunStatus` is the *speed phase* of the cabin, not its vertical heading:
//! `StartUp` is the single acceleration tick after leaving a stop and
//! `StartDown` the single deceleration tick before arriving, regardless of
//! whether the cabin is travelling up or down the shaft.  The vertical
//! heading is always [`Direction`], derived from the position.

use std::fmt;

// ── Direction ─────────────────────────────────────────────────────────────────

/// Vertical heading of a cabin or a hall call.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Stopped,
}

impl Direction {
    /// Wire string, identical to the serde encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up      => "up",
            Direction::Down    => "down",
            Direction::Stopped => "stopped",
        }
    }

    /// `true` for `Up` and `Down`.
    #[inline]
    pub fn is_moving(self) -> bool {
        self != Direction::Stopped
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RunStatus ─────────────────────────────────────────────────────────────────

/// Speed phase of a cabin.
///
/// Speeds are in sub-floor units per tick (10 units = 1 floor):
///
/// | Status          | Speed |
/// |-----------------|-------|
/// | `Stopped`       | 0     |
/// | `StartUp`       | 1     |
/// | `ConstantSpeed` | 2     |
/// | `StartDown`     | 1     |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RunStatus {
    #[default]
    Stopped,
    StartUp,
    ConstantSpeed,
    StartDown,
}

impl RunStatus {
    /// Sub-floor units travelled per tick in this phase.
    #[inline]
    pub fn speed(self) -> i32 {
        match self {
            RunStatus::Stopped       => 0,
            RunStatus::StartUp       => 1,
            RunStatus::ConstantSpeed => 2,
            RunStatus::StartDown     => 1,
        }
    }

    /// Wire string, identical to the serde encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Stopped       => "stopped",
            RunStatus::StartUp       => "start_up",
            RunStatus::ConstantSpeed => "constant_speed",
            RunStatus::StartDown     => "start_down",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
