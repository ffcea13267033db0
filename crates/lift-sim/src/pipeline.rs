//! The `Sim` struct and its four-phase tick pipeline.
//!
//! ```text
//! tick += 1
//!   ① Status   — adopt queued targets (with turnaround boarding), then
//!                advance each cabin's speed phase.     ascending id
//!   ② Arrivals — materialize due traffic entries onto the hall queues.
//!   ③ Movement — advance every cabin with a live heading; observe
//!                deceleration entry and exact arrival.  ascending id
//!   ④ Stops    — for every stopped cabin: alight, board, idle check.
//! force-complete — past the scenario duration, cancel the unfinished.
//! ```
//!
//! Determinism: phases run in this order, cabins are visited in ascending
//! id within a phase, and hall queues are strict FIFO — so identical
//! traffic plus an identical command sequence replays to an identical
//! journal and final state.  Nothing here consults a clock, RNG, or I/O.

use std::collections::BTreeMap;

use lift_building::{Elevator, Floor, Passenger, PassengerStatus};
use lift_core::{BuildingConfig, Direction, ElevatorId, PassengerId, RunStatus, Tick};
use lift_traffic::{TrafficPattern, TrafficQueue};

use crate::events::{EventKind, SimulationEvent, StopReason};
use crate::metrics::{self, MetricsReport};
use crate::{SimError, SimResult, SimulationState};

/// A running simulation: building, mutable state, pending traffic.
///
/// Construct via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    building: BuildingConfig,
    state:    SimulationState,
    traffic:  TrafficQueue,
}

impl Sim {
    pub(crate) fn assemble(
        building: BuildingConfig,
        state: SimulationState,
        traffic: TrafficQueue,
    ) -> Self {
        Self { building, state, traffic }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn building(&self) -> &BuildingConfig {
        &self.building
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn tick(&self) -> Tick {
        self.state.tick
    }

    /// Aggregate KPIs over the current state, computed on demand.
    pub fn metrics(&self) -> MetricsReport {
        metrics::compute(&self.state)
    }

    /// Traffic entries not yet materialized.
    pub fn pending_traffic(&self) -> usize {
        self.traffic.len()
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Dispatch `elevator` to `floor`.
    ///
    /// Queued (`immediate == false`): the floor becomes the cabin's
    /// `next_target_floor`, adopted once the current run finishes;
    /// overwrites an earlier queued floor.  Immediate: the current target
    /// flips at once, keeping the speed phase; the new distance is observed
    /// at the next movement step.
    ///
    /// Rejected commands never mutate state.
    pub fn go_to_floor(
        &mut self,
        elevator: ElevatorId,
        floor: i32,
        immediate: bool,
    ) -> SimResult<()> {
        if !self.building.is_valid_floor(floor) {
            return Err(SimError::FloorOutOfRange {
                floor,
                floors_count: self.building.floors_count,
            });
        }
        let cab = self
            .state
            .elevators
            .get_mut(elevator.index())
            .ok_or(SimError::UnknownElevator(elevator))?;
        if immediate {
            cab.set_target_immediate(floor);
        } else {
            cab.queue_target(floor);
        }
        Ok(())
    }

    /// Swap in a new traffic pattern without touching the rest of the
    /// state; the clock keeps running.  Used by scenario rotation.
    ///
    /// Rejected (with no state change) when the pattern references floors
    /// the current building does not have.
    pub fn replace_traffic(&mut self, pattern: &TrafficPattern) -> SimResult<()> {
        for entry in pattern.entries() {
            for floor in [entry.origin, entry.destination] {
                if !self.building.is_valid_floor(floor) {
                    return Err(SimError::FloorOutOfRange {
                        floor,
                        floors_count: self.building.floors_count,
                    });
                }
            }
        }
        self.traffic = TrafficQueue::from_pattern(pattern);
        Ok(())
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Produce `ticks` consecutive ticks and return the journal slice they
    /// appended.
    ///
    /// An invariant violation aborts the call with no further ticks run.
    pub fn step(&mut self, ticks: u64) -> SimResult<Vec<SimulationEvent>> {
        let events_start = self.state.events.len();
        for _ in 0..ticks {
            self.advance_tick()?;
        }
        Ok(self.state.events_since(events_start).to_vec())
    }

    fn advance_tick(&mut self) -> SimResult<()> {
        self.state.tick = self.state.tick + 1;

        self.phase_status_update();
        self.phase_arrivals();
        let moved = self.phase_movement();
        self.phase_stops(&moved);

        if self.building.duration > 0 && self.state.tick.0 >= self.building.duration {
            self.force_complete();
        }

        self.state
            .check_invariants()
            .map_err(|reason| SimError::InvariantViolation {
                tick: self.state.tick,
                reason,
            })
    }

    // ── Phase ①: status update ────────────────────────────────────────────

    fn phase_status_update(&mut self) {
        let now = self.state.tick;
        let SimulationState { elevators, floors, passengers, events, .. } = &mut self.state;

        for cab in elevators.iter_mut() {
            if cab.adopt_next_target().is_some() {
                // Turnaround boarding: a parked cabin that just took on a new
                // run admits the passengers already heading its way.
                let heading = cab.target_floor_direction();
                if heading.is_moving() {
                    let floor = &mut floors[cab.position.current_floor as usize];
                    board_from_queue(cab, floor, passengers, events, heading, now);
                }
            }
            cab.progress_status();
        }
    }

    // ── Phase ②: arrivals ─────────────────────────────────────────────────

    fn phase_arrivals(&mut self) {
        let now = self.state.tick;
        for entry in self.traffic.pop_due(now) {
            // A rotated-in pattern may reuse an id still alive from the
            // previous round; the original passenger wins.
            if self.state.passengers.contains_key(&entry.id) {
                continue;
            }
            let passenger = Passenger::new(entry.id, entry.origin, entry.destination, now);
            let direction = passenger.call_direction();
            self.state.floors[entry.origin as usize].enqueue(direction, entry.id);
            let kind = match direction {
                Direction::Up => EventKind::UpButtonPressed {
                    floor:     entry.origin,
                    passenger: entry.id,
                },
                _ => EventKind::DownButtonPressed {
                    floor:     entry.origin,
                    passenger: entry.id,
                },
            };
            self.state.events.push(SimulationEvent { tick: now, kind });
            self.state.passengers.insert(entry.id, passenger);
        }
    }

    // ── Phase ③: movement ─────────────────────────────────────────────────

    /// Advance every cabin with a live heading.  Returns the heading each
    /// cabin actually moved in this tick (`Stopped` for parked cabins),
    /// which Phase ④ folds into `last_tick_direction`.
    fn phase_movement(&mut self) -> Vec<Direction> {
        let now = self.state.tick;
        let SimulationState { elevators, events, .. } = &mut self.state;
        let mut moved = vec![Direction::Stopped; elevators.len()];

        for (idx, cab) in elevators.iter_mut().enumerate() {
            let direction = cab.target_floor_direction();
            if !direction.is_moving() {
                continue;
            }
            // Clamp to the remaining distance: an immediate retarget can
            // land the target closer than one cruise move, and the cabin
            // must stop exactly on it rather than overshoot and reverse.
            let speed = cab.run_status.speed().min(cab.position.distance_to_target());
            if speed == 0 {
                // A freshly redirected cabin accelerates next tick.
                continue;
            }

            let old_floor     = cab.position.current_floor;
            let from_position = cab.position.current_floor_float();
            let status        = cab.run_status;

            cab.position.advance_towards_target(speed);

            events.push(SimulationEvent {
                tick: now,
                kind: EventKind::ElevatorMove {
                    elevator:    cab.id,
                    from_position,
                    to_position: cab.position.current_floor_float(),
                    direction,
                    status,
                },
            });

            // One floor-unit out: spend next tick decelerating.
            if cab.run_status == RunStatus::ConstantSpeed && cab.position.distance_to_target() == 1 {
                cab.run_status = RunStatus::StartDown;
            }

            let new_floor = cab.position.current_floor;
            if new_floor != old_floor && new_floor != cab.position.target_floor {
                events.push(SimulationEvent {
                    tick: now,
                    kind: EventKind::PassingFloor {
                        elevator: cab.id,
                        floor:    new_floor,
                        direction,
                    },
                });
            }

            if cab.run_status == RunStatus::StartDown
                && cab.position.distance_to_target() <= 1
                && !cab.position.is_at_target()
            {
                events.push(SimulationEvent {
                    tick: now,
                    kind: EventKind::ElevatorApproaching {
                        elevator: cab.id,
                        floor:    cab.position.target_floor,
                        direction,
                    },
                });
            }

            if cab.position.is_at_target() {
                cab.run_status = RunStatus::Stopped;
                events.push(SimulationEvent {
                    tick: now,
                    kind: EventKind::StoppedAtFloor {
                        elevator: cab.id,
                        floor:    cab.position.current_floor,
                        reason:   StopReason::MoveReached,
                    },
                });
            }

            cab.energy_consumed += cab.energy_rate;
            moved[idx] = direction;
        }

        moved
    }

    // ── Phase ④: stops ────────────────────────────────────────────────────

    fn phase_stops(&mut self, moved: &[Direction]) {
        let now = self.state.tick;
        let SimulationState { elevators, floors, passengers, events, .. } = &mut self.state;

        for (idx, cab) in elevators.iter_mut().enumerate() {
            if cab.run_status != RunStatus::Stopped {
                continue;
            }
            // Refresh before boarding so a cabin that arrived this tick
            // filters the hall queue by its actual travel direction.
            cab.last_tick_direction = moved[idx];

            let here = cab.position.current_floor;

            // Alight, in boarding order.
            for pid in cab.take_arrivals(here) {
                if let Some(p) = passengers.get_mut(&pid) {
                    p.dropoff_tick = now;
                }
                events.push(SimulationEvent {
                    tick: now,
                    kind: EventKind::PassengerAlight {
                        elevator:  cab.id,
                        floor:     here,
                        passenger: pid,
                    },
                });
            }

            // Board: direction-matched after a run, both queues when idle.
            let floor = &mut floors[here as usize];
            if cab.is_idle() {
                board_from_queue(cab, floor, passengers, events, Direction::Up, now);
                board_from_queue(cab, floor, passengers, events, Direction::Down, now);
            } else {
                let heading = cab.last_tick_direction;
                if heading.is_moving() {
                    board_from_queue(cab, floor, passengers, events, heading, now);
                }
            }

            if cab.target_floor_direction() == Direction::Stopped && cab.next_target_floor.is_none()
            {
                events.push(SimulationEvent {
                    tick: now,
                    kind: EventKind::Idle { elevator: cab.id, floor: here },
                });
            }
        }
    }

    // ── Forced completion ─────────────────────────────────────────────────

    /// Past the scenario duration: cancel everyone not yet delivered and
    /// drain the containers so the structural invariants keep holding.
    fn force_complete(&mut self) {
        let now = self.state.tick;
        let SimulationState { elevators, floors, passengers, .. } = &mut self.state;

        for floor in floors.iter_mut() {
            floor.clear();
        }
        for cab in elevators.iter_mut() {
            cab.evacuate();
        }
        for p in passengers.values_mut() {
            match p.status() {
                PassengerStatus::Waiting | PassengerStatus::InElevator => {
                    p.cancelled = true;
                    p.dropoff_tick = now;
                }
                PassengerStatus::Completed | PassengerStatus::Cancelled => {}
            }
        }
    }
}

// ── Boarding ──────────────────────────────────────────────────────────────────

/// Move passengers from one hall queue into a cabin, FIFO, until the queue
/// empties or the cabin fills.  Stamps pickup state and journals one
/// `passenger_board` per passenger.
fn board_from_queue(
    cab:        &mut Elevator,
    floor:      &mut Floor,
    passengers: &mut BTreeMap<PassengerId, Passenger>,
    events:     &mut Vec<SimulationEvent>,
    direction:  Direction,
    now:        Tick,
) {
    while !cab.is_full() {
        let Some(pid) = floor.pop_front(direction) else {
            break;
        };
        let Some(p) = passengers.get_mut(&pid) else {
            debug_assert!(false, "queued passenger {pid} has no record");
            continue;
        };
        p.pickup_tick = now;
        p.elevator_id = Some(cab.id);
        cab.board(pid, p.destination);
        events.push(SimulationEvent {
            tick: now,
            kind: EventKind::PassengerBoard {
                elevator:  cab.id,
                floor:     floor.floor_number,
                passenger: pid,
            },
        });
    }
}
