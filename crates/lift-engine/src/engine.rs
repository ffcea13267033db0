//! The `Engine`: one simulation behind one mutex.
//!
//! # Concurrency model
//!
//! Single engine instance, multiple clients.  Every public operation
//! acquires the engine mutex for its full duration, so concurrent callers
//! observe a serializable execution: `step(n)` is atomic from the outside,
//! `get_state` snapshots always satisfy the structural invariants, and a
//! command issued between two steps takes effect at the start of the next
//! tick.  The engine performs no I/O and holds no other locks, so the
//! critical sections are short and finer-grained locking would buy nothing.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use lift_core::{ElevatorId, Tick};
use lift_sim::{MetricsReport, Sim, SimBuilder, SimulationEvent, SimulationState};
use lift_traffic::{load_scenarios, Scenario};

use crate::{EngineError, EngineResult};

/// Rotation-set summary returned by [`Engine::traffic_info`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficInfo {
    /// Index of the scenario currently feeding the simulation.
    pub current_index: usize,
    /// How many scenarios the rotation set holds.
    pub total_files: usize,
    /// Planning horizon of the current scenario (its duration, or the last
    /// arrival tick for open-ended scenarios).
    pub max_tick: u64,
}

#[derive(Debug)]
struct EngineInner {
    scenarios: Vec<Scenario>,
    current:   usize,
    sim:       Sim,
}

/// The thread-safe service facade over one simulation.
#[derive(Debug)]
pub struct Engine {
    inner: Mutex<EngineInner>,
}

impl Engine {
    // ── Construction ──────────────────────────────────────────────────────

    /// Build an engine over a non-empty rotation set, starting on the first
    /// scenario.
    pub fn new(scenarios: Vec<Scenario>) -> EngineResult<Self> {
        let first = scenarios
            .first()
            .ok_or_else(|| EngineError::InvalidArgument("no scenarios configured".into()))?;
        let sim = build_sim(first)?;
        info!(scenario = %first.building.scenario, "engine initialized");
        Ok(Self {
            inner: Mutex::new(EngineInner { scenarios, current: 0, sim }),
        })
    }

    /// Convenience: load the rotation set from scenario files.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> EngineResult<Self> {
        Self::new(load_scenarios(paths)?)
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, EngineInner>> {
        self.inner
            .lock()
            .map_err(|_| EngineError::Internal("engine state poisoned by a prior panic".into()))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// A coherent snapshot of the full simulation state.
    pub fn get_state(&self) -> EngineResult<SimulationState> {
        Ok(self.lock()?.sim.state().clone())
    }

    /// Aggregate KPIs over the current state.
    pub fn metrics(&self) -> EngineResult<MetricsReport> {
        Ok(self.lock()?.sim.metrics())
    }

    /// Rotation-set bookkeeping for controllers planning ahead.
    pub fn traffic_info(&self) -> EngineResult<TrafficInfo> {
        let inner = self.lock()?;
        Ok(TrafficInfo {
            current_index: inner.current,
            total_files:   inner.scenarios.len(),
            max_tick:      inner.scenarios[inner.current].pattern.max_tick(),
        })
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Advance the simulation by `ticks` (≥ 1) and return the new journal
    /// slice.  Atomic: no other operation interleaves with the ticks.
    pub fn step(&self, ticks: u64) -> EngineResult<(Tick, Vec<SimulationEvent>)> {
        if ticks < 1 {
            return Err(EngineError::InvalidArgument(format!(
                "ticks must be >= 1, got {ticks}"
            )));
        }
        let mut inner = self.lock()?;
        let events = inner.sim.step(ticks)?;
        let tick = inner.sim.tick();
        debug!(%tick, events = events.len(), "stepped {ticks} tick(s)");
        Ok((tick, events))
    }

    /// Dispatch an elevator (see [`Sim::go_to_floor`]).  Takes effect at the
    /// next tick's status phase — or immediately mid-flight when
    /// `immediate` is set.
    pub fn go_to_floor(
        &self,
        elevator: ElevatorId,
        floor: i32,
        immediate: bool,
    ) -> EngineResult<()> {
        let mut inner = self.lock()?;
        match inner.sim.go_to_floor(elevator, floor, immediate) {
            Ok(()) => {
                debug!(%elevator, floor, immediate, "dispatch accepted");
                Ok(())
            }
            Err(e) => {
                warn!(%elevator, floor, immediate, error = %e, "dispatch rejected");
                Err(e.into())
            }
        }
    }

    /// Rebuild the simulation from the current scenario: cabins parked at
    /// floor 0, no passengers, tick 0, empty journal.
    pub fn reset(&self) -> EngineResult<()> {
        let mut guard = self.lock()?;
        let inner = &mut *guard;
        let scenario = &inner.scenarios[inner.current];
        info!(scenario = %scenario.building.scenario, "reset");
        inner.sim = build_sim(scenario)?;
        Ok(())
    }

    /// Advance to the next scenario in the rotation set.
    ///
    /// With `full_reset`, the simulation is rebuilt from the new scenario's
    /// building; otherwise only the pending traffic is swapped and the
    /// clock keeps running.
    pub fn next_traffic_round(&self, full_reset: bool) -> EngineResult<()> {
        let mut guard = self.lock()?;
        let inner = &mut *guard;
        if inner.current + 1 >= inner.scenarios.len() {
            return Err(EngineError::NoMoreScenarios);
        }
        let next = inner.current + 1;
        let scenario = &inner.scenarios[next];
        info!(
            scenario = %scenario.building.scenario,
            index = next,
            full_reset,
            "traffic rotation"
        );
        if full_reset {
            inner.sim = build_sim(scenario)?;
        } else {
            inner.sim.replace_traffic(&scenario.pattern)?;
        }
        inner.current = next;
        Ok(())
    }
}

fn build_sim(scenario: &Scenario) -> EngineResult<Sim> {
    SimBuilder::new(scenario.building.clone())
        .pattern(scenario.pattern.clone())
        .build()
        .map_err(EngineError::from)
}
