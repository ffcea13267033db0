//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter with no wall-clock
//! mapping: one tick is the indivisible unit of simulated time, and the
//! engine advances it only inside `step`.  Using an integer tick as the
//! canonical time unit means all schedule arithmetic is exact and
//! comparisons are O(1).
//!
//! `Tick::ZERO` doubles as the "not yet" sentinel in passenger records
//! (`pickup_tick`, `dropoff_tick`): the pipeline produces ticks starting at
//! 1, so a zero tick can never be a real pickup or dropoff time.

use std::fmt;

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at one tick per simulated second a `u64` lasts ~585
/// billion years, so overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }

    /// `true` if this is the `ZERO` sentinel ("not yet happened").
    #[inline]
    pub fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
