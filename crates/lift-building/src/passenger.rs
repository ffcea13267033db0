//! Passenger lifecycle records.
//!
//! A passenger's status is never stored — it is derived from which of the
//! tick stamps have been set, so the record cannot drift out of sync with
//! itself:
//!
//! ```text
//! Waiting      pickup unset
//! InElevator   pickup set, dropoff unset
//! Completed    dropoff set, not cancelled
//! Cancelled    dropoff set, cancelled (forced completion only)
//! ```

use lift_core::{Direction, ElevatorId, PassengerId, Tick};

/// Derived lifecycle state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PassengerStatus {
    Waiting,
    InElevator,
    Completed,
    Cancelled,
}

/// One passenger, from hall call to delivery (or cancellation).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id: PassengerId,
    pub origin: i32,
    pub destination: i32,

    /// Tick the passenger appeared on `origin`'s hall queue.
    pub arrive_tick: Tick,

    /// Tick the passenger boarded a cabin; `Tick::ZERO` until then.
    pub pickup_tick: Tick,

    /// Tick the passenger was delivered (or cancelled); `Tick::ZERO` until
    /// then.
    pub dropoff_tick: Tick,

    /// Cabin currently or last carrying the passenger.
    pub elevator_id: Option<ElevatorId>,

    /// Set only by forced completion at the scenario duration cutoff.
    pub cancelled: bool,
}

impl Passenger {
    /// A freshly arrived passenger, not yet picked up.
    pub fn new(id: PassengerId, origin: i32, destination: i32, arrive_tick: Tick) -> Self {
        Self {
            id,
            origin,
            destination,
            arrive_tick,
            pickup_tick:  Tick::ZERO,
            dropoff_tick: Tick::ZERO,
            elevator_id:  None,
            cancelled:    false,
        }
    }

    /// Derived lifecycle state (see module docs).
    pub fn status(&self) -> PassengerStatus {
        if self.cancelled {
            PassengerStatus::Cancelled
        } else if !self.dropoff_tick.is_unset() {
            PassengerStatus::Completed
        } else if !self.pickup_tick.is_unset() {
            PassengerStatus::InElevator
        } else {
            PassengerStatus::Waiting
        }
    }

    /// Direction of the hall call: up iff the destination is above the
    /// origin.  A degenerate same-floor entry calls down.
    pub fn call_direction(&self) -> Direction {
        if self.destination > self.origin {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Ticks spent waiting on the hall queue; `None` until picked up.
    pub fn floor_wait_time(&self) -> Option<u64> {
        (!self.pickup_tick.is_unset()).then(|| self.pickup_tick.since(self.arrive_tick))
    }

    /// Ticks from appearance to delivery; `None` until completed.
    /// Cancelled passengers report `None` — they were never delivered.
    pub fn arrival_wait_time(&self) -> Option<u64> {
        (self.status() == PassengerStatus::Completed)
            .then(|| self.dropoff_tick.since(self.arrive_tick))
    }
}
