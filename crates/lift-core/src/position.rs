//! Exact integer sub-floor positions.
//!
//! # Design
//!
//! A cabin's vertical position is `(current_floor, floor_up_position)` where
//! `floor_up_position` counts tenths of a floor above `current_floor` and is
//! normalized into `[0, 9]` after every mutation.  All movement arithmetic
//! happens on these integers; the only fractional value in the crate is
//! [`Position::current_floor_float`], which exists for reporting and event
//! payloads and never feeds back into state transitions.
//!
//! Comparisons against the target are done on the scaled axis
//! (`floor * 10 + floor_up_position`) so that a cabin sitting *between*
//! floors still reads the correct heading even when its target equals its
//! integer floor.

use crate::motion::Direction;

/// Sub-floor units per floor.  The whole engine assumes this scale.
pub const UNITS_PER_FLOOR: i32 = 10;

/// Exact cabin position plus its current target floor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Integer floor the cabin is at or just above.
    pub current_floor: i32,
    /// Tenths of a floor above `current_floor`, in `[0, 9]`.
    pub floor_up_position: i32,
    /// The floor the cabin is currently commanded to reach.
    pub target_floor: i32,
}

impl Position {
    /// A cabin parked exactly at `floor`, targeting it.
    pub fn at_floor(floor: i32) -> Self {
        Self {
            current_floor:     floor,
            floor_up_position: 0,
            target_floor:      floor,
        }
    }

    // ── Scaled-axis helpers ───────────────────────────────────────────────

    /// Current position in sub-floor units from floor 0.
    #[inline]
    fn scaled(&self) -> i32 {
        self.current_floor * UNITS_PER_FLOOR + self.floor_up_position
    }

    /// Target position in sub-floor units from floor 0.
    #[inline]
    fn scaled_target(&self) -> i32 {
        self.target_floor * UNITS_PER_FLOOR
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Remaining distance to the target in sub-floor units (0 at target).
    #[inline]
    pub fn distance_to_target(&self) -> i32 {
        (self.scaled_target() - self.scaled()).abs()
    }

    /// `true` iff the cabin sits exactly on its target floor.
    #[inline]
    pub fn is_at_target(&self) -> bool {
        self.current_floor == self.target_floor && self.floor_up_position == 0
    }

    /// Heading towards the target: `Stopped` only when exactly there.
    pub fn target_direction(&self) -> Direction {
        use std::cmp::Ordering::*;
        match self.scaled_target().cmp(&self.scaled()) {
            Greater => Direction::Up,
            Less    => Direction::Down,
            Equal   => Direction::Stopped,
        }
    }

    /// Presentational position in floors, e.g. `2.5` for half-way above 2.
    ///
    /// The single place a fraction appears; never used in state transitions.
    #[inline]
    pub fn current_floor_float(&self) -> f64 {
        self.current_floor as f64 + self.floor_up_position as f64 / UNITS_PER_FLOOR as f64
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move by `delta` signed sub-floor units and normalize.
    ///
    /// Postcondition: `0 <= floor_up_position <= 9`.
    pub fn advance(&mut self, delta: i32) {
        self.floor_up_position += delta;
        while self.floor_up_position >= UNITS_PER_FLOOR {
            self.current_floor += 1;
            self.floor_up_position -= UNITS_PER_FLOOR;
        }
        while self.floor_up_position < 0 {
            self.current_floor -= 1;
            self.floor_up_position += UNITS_PER_FLOOR;
        }
    }

    /// Move up to `units` sub-floor units *towards the target*, clamped to
    /// the remaining distance so the cabin can never pass its target.
    ///
    /// The clamp matters when a retarget lands the target closer than one
    /// move: a cruising cabin redirected to a floor one unit away must
    /// finish there, not swing past and double back.
    pub fn advance_towards_target(&mut self, units: i32) {
        let units = units.min(self.distance_to_target());
        match self.target_direction() {
            Direction::Up      => self.advance(units),
            Direction::Down    => self.advance(-units),
            Direction::Stopped => {}
        }
    }
}
