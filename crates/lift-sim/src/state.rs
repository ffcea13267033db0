//! `SimulationState` — everything mutable in one place.
//!
//! The state is owned exclusively by [`Sim`][crate::Sim] and mutated only by
//! the tick pipeline and `go_to_floor`.  External callers receive clones
//! taken under the engine lock, so a snapshot always satisfies the
//! structural invariants checked by [`SimulationState::check_invariants`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use lift_building::{Elevator, Floor, Passenger, PassengerStatus};
use lift_core::{BuildingConfig, ElevatorId, PassengerId, Tick, UNITS_PER_FLOOR};

use crate::SimulationEvent;

/// The complete mutable state of one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// The last tick that has been fully produced (0 before the first step).
    pub tick: Tick,

    /// All cabins, indexed by `ElevatorId`.
    pub elevators: Vec<Elevator>,

    /// All floors, indexed by floor number.
    pub floors: Vec<Floor>,

    /// Every passenger ever materialized, keyed by id.
    pub passengers: BTreeMap<PassengerId, Passenger>,

    /// The append-only event journal.
    pub events: Vec<SimulationEvent>,
}

impl SimulationState {
    /// A fresh state: cabins parked at floor 0, empty floors, no passengers.
    pub fn new(config: &BuildingConfig) -> Self {
        let elevators = (0..config.elevators_count)
            .map(|i| {
                Elevator::new(
                    ElevatorId(i as u32),
                    config.max_capacity,
                    config.energy_rate(i),
                )
            })
            .collect();
        let floors = (0..config.floors_count)
            .map(|n| Floor::new(n as i32))
            .collect();
        Self {
            tick: Tick::ZERO,
            elevators,
            floors,
            passengers: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.get(id.index())
    }

    pub fn floor(&self, number: i32) -> Option<&Floor> {
        usize::try_from(number).ok().and_then(|n| self.floors.get(n))
    }

    /// The journal slice appended since `start` (an index captured earlier).
    pub fn events_since(&self, start: usize) -> &[SimulationEvent] {
        &self.events[start.min(self.events.len())..]
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Verify the structural invariants that must hold at every tick
    /// boundary.  Returns the first violation found.
    ///
    /// 1. Status conservation: every passenger is in exactly one lifecycle
    ///    bucket, and the bucket matches the containers.
    /// 2. Every waiting passenger stands exactly once in the correct
    ///    direction queue of its origin floor.
    /// 3. Every riding passenger appears exactly once in its cabin.
    /// 4. Cabin floors and targets are inside the building; sub-floor
    ///    offsets are normalized.
    /// 5. No cabin exceeds its capacity.
    pub fn check_invariants(&self) -> Result<(), String> {
        let floors_count = self.floors.len();

        // ── 4 & 5: per-cabin checks ───────────────────────────────────────
        for e in &self.elevators {
            let pos = &e.position;
            if pos.current_floor < 0 || pos.current_floor as usize >= floors_count {
                return Err(format!("{} at out-of-building floor {}", e.id, pos.current_floor));
            }
            if pos.target_floor < 0 || pos.target_floor as usize >= floors_count {
                return Err(format!("{} targets out-of-building floor {}", e.id, pos.target_floor));
            }
            if !(0..UNITS_PER_FLOOR).contains(&pos.floor_up_position) {
                return Err(format!("{} has unnormalized sub-floor offset {}", e.id, pos.floor_up_position));
            }
            if e.passengers.len() > e.max_capacity {
                return Err(format!("{} over capacity: {}/{}", e.id, e.passengers.len(), e.max_capacity));
            }
        }

        // ── 1–3: per-passenger placement ──────────────────────────────────
        let mut waiting = 0usize;
        let mut riding = 0usize;
        for p in self.passengers.values() {
            match p.status() {
                PassengerStatus::Waiting => {
                    waiting += 1;
                    let on_origin = self
                        .floor(p.origin)
                        .map(|f| {
                            let queue = match p.call_direction() {
                                lift_core::Direction::Up => &f.up_queue,
                                _                        => &f.down_queue,
                            };
                            queue.iter().filter(|&&q| q == p.id).count()
                        })
                        .unwrap_or(0);
                    if on_origin != 1 {
                        return Err(format!(
                            "waiting {} appears {} times in its origin queue",
                            p.id, on_origin
                        ));
                    }
                }
                PassengerStatus::InElevator => {
                    riding += 1;
                    let cabin = p
                        .elevator_id
                        .and_then(|id| self.elevator(id))
                        .ok_or_else(|| format!("riding {} has no cabin", p.id))?;
                    let aboard = cabin.passengers.iter().filter(|&&q| q == p.id).count();
                    if aboard != 1 {
                        return Err(format!(
                            "riding {} appears {} times in {}",
                            p.id, aboard, cabin.id
                        ));
                    }
                }
                PassengerStatus::Completed | PassengerStatus::Cancelled => {}
            }
        }

        // ── 1: container totals match the buckets ─────────────────────────
        let queued: usize = self.floors.iter().map(Floor::waiting_count).sum();
        if queued != waiting {
            return Err(format!("{queued} queued on floors but {waiting} waiting passengers"));
        }
        let aboard: usize = self.elevators.iter().map(|e| e.passengers.len()).sum();
        if aboard != riding {
            return Err(format!("{aboard} aboard cabins but {riding} riding passengers"));
        }

        Ok(())
    }
}
