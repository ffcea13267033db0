//! The event journal.
//!
//! Every observable state change appends one `SimulationEvent` to the
//! journal.  The journal is append-only — no event is ever retracted — and
//! ordered exactly as the tick pipeline produced it, so replaying a journal
//! narrates the simulation.
//!
//! # Wire shape
//!
//! Events serialize as `{"tick": N, "type": "<snake_case>", "data": {…}}`.
//! The `data` keys per type are part of the external contract and must not
//! change:
//!
//! | type                   | data keys                                            |
//! |------------------------|------------------------------------------------------|
//! | `up_button_pressed`    | floor, passenger                                     |
//! | `down_button_pressed`  | floor, passenger                                     |
//! | `passing_floor`        | elevator, floor, direction                           |
//! | `stopped_at_floor`     | elevator, floor, reason                              |
//! | `elevator_approaching` | elevator, floor, direction                           |
//! | `idle`                 | elevator, floor                                      |
//! | `passenger_board`      | elevator, floor, passenger                           |
//! | `passenger_alight`     | elevator, floor, passenger                           |
//! | `elevator_move`        | elevator, from_position, to_position, direction, status |

use serde::{Deserialize, Serialize};

use lift_core::{Direction, ElevatorId, PassengerId, RunStatus, Tick};

/// Why a cabin stopped.  Currently only regular arrival.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    MoveReached,
}

/// One journal entry: the tick it happened plus the typed payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    pub tick: Tick,
    #[serde(flatten)]
    pub kind: EventKind,
}

/// Typed event payloads.  Adjacent tagging (`type` + `data`) produces the
/// exact wire shape documented above.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum EventKind {
    UpButtonPressed {
        floor: i32,
        passenger: PassengerId,
    },
    DownButtonPressed {
        floor: i32,
        passenger: PassengerId,
    },
    PassingFloor {
        elevator: ElevatorId,
        floor: i32,
        direction: Direction,
    },
    StoppedAtFloor {
        elevator: ElevatorId,
        floor: i32,
        reason: StopReason,
    },
    ElevatorApproaching {
        elevator: ElevatorId,
        floor: i32,
        direction: Direction,
    },
    Idle {
        elevator: ElevatorId,
        floor: i32,
    },
    PassengerBoard {
        elevator: ElevatorId,
        floor: i32,
        passenger: PassengerId,
    },
    PassengerAlight {
        elevator: ElevatorId,
        floor: i32,
        passenger: PassengerId,
    },
    ElevatorMove {
        elevator: ElevatorId,
        from_position: f64,
        to_position: f64,
        direction: Direction,
        status: RunStatus,
    },
}

impl EventKind {
    /// The wire `type` string, for logging and filtering.
    pub fn type_str(&self) -> &'static str {
        match self {
            EventKind::UpButtonPressed { .. }     => "up_button_pressed",
            EventKind::DownButtonPressed { .. }   => "down_button_pressed",
            EventKind::PassingFloor { .. }        => "passing_floor",
            EventKind::StoppedAtFloor { .. }      => "stopped_at_floor",
            EventKind::ElevatorApproaching { .. } => "elevator_approaching",
            EventKind::Idle { .. }                => "idle",
            EventKind::PassengerBoard { .. }      => "passenger_board",
            EventKind::PassengerAlight { .. }     => "passenger_alight",
            EventKind::ElevatorMove { .. }        => "elevator_move",
        }
    }
}
