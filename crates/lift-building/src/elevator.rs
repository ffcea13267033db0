//! The `Elevator` cabin and its speed-phase state machine.
//!
//! # Speed phases
//!
//! ```text
//!            direction != Stopped              unconditionally
//!  Stopped ───────────────────────▶ StartUp ───────────────────▶ ConstantSpeed
//!     ▲                                                               │
//!     │          reaches target                distance == 1          │
//!     └──────────────────────────── StartDown ◀───────────────────────┘
//! ```
//!
//! The first two transitions run in the status-update phase of a tick; the
//! last two are observed during movement (`lift-sim` applies them when the
//! advanced position satisfies the guard).  `StartUp`/`StartDown` mean
//! acceleration/deceleration, never vertical heading — a cabin descending
//! the shaft still passes through `StartUp` when it leaves a stop.

use std::collections::BTreeMap;

use lift_core::{Direction, ElevatorId, PassengerId, Position, RunStatus};

/// One cabin: exact position, target queue, passengers, energy meter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    pub id: ElevatorId,

    /// Exact sub-floor position plus the currently commanded target.
    pub position: Position,

    /// Target queued behind the current one; adopted when the cabin goes
    /// idle.  A later queued command overwrites an earlier one.
    pub next_target_floor: Option<i32>,

    /// Passengers on board, in boarding order.
    pub passengers: Vec<PassengerId>,

    pub max_capacity: usize,

    /// Speed phase, advanced by the tick pipeline.
    pub run_status: RunStatus,

    /// Heading observed during the most recent movement phase; `Stopped`
    /// when the cabin did not move last tick.
    pub last_tick_direction: Direction,

    /// Destination per passenger on board — the cabin's indicator panel.
    /// Ordered map so snapshots and iteration are deterministic.
    pub passenger_destinations: BTreeMap<PassengerId, i32>,

    /// Total energy drawn so far.
    pub energy_consumed: f64,

    /// Energy drawn per moved tick.
    pub energy_rate: f64,
}

impl Elevator {
    /// A new cabin parked at floor 0 with an empty target queue.
    pub fn new(id: ElevatorId, max_capacity: usize, energy_rate: f64) -> Self {
        Self {
            id,
            position:               Position::at_floor(0),
            next_target_floor:      None,
            passengers:             Vec::new(),
            max_capacity,
            run_status:             RunStatus::Stopped,
            last_tick_direction:    Direction::Stopped,
            passenger_destinations: BTreeMap::new(),
            energy_consumed:        0.0,
            energy_rate,
        }
    }

    // ── Derived state ─────────────────────────────────────────────────────

    /// Heading towards the current target (`Stopped` when exactly there).
    #[inline]
    pub fn target_floor_direction(&self) -> Direction {
        self.position.target_direction()
    }

    /// Idle: parked on its target with nothing queued behind it.
    pub fn is_idle(&self) -> bool {
        self.run_status == RunStatus::Stopped
            && self.next_target_floor.is_none()
            && self.target_floor_direction() == Direction::Stopped
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.max_capacity
    }

    /// Occupancy in `[0.0, 1.0]`.
    pub fn load_factor(&self) -> f64 {
        if self.max_capacity == 0 {
            return 0.0;
        }
        self.passengers.len() as f64 / self.max_capacity as f64
    }

    /// Floors requested from inside the cabin, ascending and deduplicated.
    pub fn pressed_floors(&self) -> Vec<i32> {
        let mut floors: Vec<i32> = self.passenger_destinations.values().copied().collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Queue `floor` to be adopted once the cabin goes idle, overwriting any
    /// previously queued target.
    pub fn queue_target(&mut self, floor: i32) {
        self.next_target_floor = Some(floor);
    }

    /// Redirect the cabin to `floor` right now, keeping its speed phase.
    /// The new distance is observed at the next movement step.
    pub fn set_target_immediate(&mut self, floor: i32) {
        self.position.target_floor = floor;
    }

    // ── Status-update phase ───────────────────────────────────────────────

    /// Adopt the queued target if the cabin is exactly on its current one.
    ///
    /// Returns the adopted floor so the caller can run turnaround boarding
    /// against the new heading.
    pub fn adopt_next_target(&mut self) -> Option<i32> {
        if self.target_floor_direction() != Direction::Stopped {
            return None;
        }
        let next = self.next_target_floor.take()?;
        self.position.target_floor = next;
        Some(next)
    }

    /// Advance the speed phase for this tick.
    ///
    /// `Stopped` cabins with a live heading begin accelerating; a cabin that
    /// spent last tick accelerating reaches cruise speed.  Deceleration entry
    /// and arrival are movement-phase observations and not handled here.
    /// A cabin whose heading collapsed to `Stopped` mid-phase (an immediate
    /// retarget onto its exact position) is normalized back to `Stopped`.
    pub fn progress_status(&mut self) {
        let direction = self.target_floor_direction();
        match self.run_status {
            RunStatus::Stopped if direction.is_moving() => {
                self.run_status = RunStatus::StartUp;
            }
            RunStatus::StartUp if direction.is_moving() => {
                self.run_status = RunStatus::ConstantSpeed;
            }
            RunStatus::StartUp | RunStatus::ConstantSpeed | RunStatus::StartDown
                if !direction.is_moving() =>
            {
                self.run_status = RunStatus::Stopped;
            }
            _ => {}
        }
    }

    // ── Cabin membership ──────────────────────────────────────────────────

    /// Board one passenger.  Returns `false` (and changes nothing) at
    /// capacity.
    pub fn board(&mut self, passenger: PassengerId, destination: i32) -> bool {
        if self.is_full() {
            return false;
        }
        self.passengers.push(passenger);
        self.passenger_destinations.insert(passenger, destination);
        true
    }

    /// Remove every passenger whose destination is `floor`, in boarding
    /// order, and return them.
    pub fn take_arrivals(&mut self, floor: i32) -> Vec<PassengerId> {
        let mut alighted = Vec::new();
        self.passengers.retain(|&p| {
            if self.passenger_destinations.get(&p) == Some(&floor) {
                alighted.push(p);
                false
            } else {
                true
            }
        });
        for p in &alighted {
            self.passenger_destinations.remove(p);
        }
        alighted
    }

    /// Drop everyone on board (forced completion).  Returns the evicted
    /// passengers in boarding order.
    pub fn evacuate(&mut self) -> Vec<PassengerId> {
        self.passenger_destinations.clear();
        std::mem::take(&mut self.passengers)
    }
}
