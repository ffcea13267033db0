//! Aggregated KPIs, computed on demand from a state snapshot.
//!
//! Nothing here is cached or incremental: a metrics report is a pure fold
//! over the passenger table and the cabins, so it can be taken at any tick
//! boundary without touching pipeline state.
//!
//! # The 95% figures
//!
//! `p95_*` are **trimmed means over the shortest 95%** of wait times (sort
//! ascending, keep `⌊n·0.95⌋` values, average those) — *not* the 95th-
//! percentile order statistic.  The definition is preserved for wire
//! compatibility with existing controllers; read it as "mean excluding the
//! worst 5%".

use serde::{Deserialize, Serialize};

use lift_building::PassengerStatus;

use crate::SimulationState;

/// Aggregate service quality and energy figures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub completed_passengers: usize,
    pub total_passengers: usize,
    /// `completed / total`, 0.0 when no passengers exist.  Cancelled
    /// passengers count toward the denominator only.
    pub completion_rate: f64,

    pub average_floor_wait_time: f64,
    pub average_arrival_wait_time: f64,
    pub p95_floor_wait_time: f64,
    pub p95_arrival_wait_time: f64,

    pub total_energy_consumption: f64,
}

/// Fold the current state into a [`MetricsReport`].
pub fn compute(state: &SimulationState) -> MetricsReport {
    let total = state.passengers.len();

    let mut floor_waits:   Vec<u64> = Vec::new();
    let mut arrival_waits: Vec<u64> = Vec::new();
    for p in state.passengers.values() {
        if p.status() != PassengerStatus::Completed {
            continue;
        }
        if let Some(w) = p.floor_wait_time() {
            floor_waits.push(w);
        }
        if let Some(w) = p.arrival_wait_time() {
            arrival_waits.push(w);
        }
    }
    let completed = arrival_waits.len();

    let completion_rate = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64
    };

    MetricsReport {
        completed_passengers: completed,
        total_passengers: total,
        completion_rate,
        average_floor_wait_time:   mean(&floor_waits),
        average_arrival_wait_time: mean(&arrival_waits),
        p95_floor_wait_time:       shortest_share_mean(floor_waits, 0.95),
        p95_arrival_wait_time:     shortest_share_mean(arrival_waits, 0.95),
        total_energy_consumption:  state.elevators.iter().map(|e| e.energy_consumed).sum(),
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<u64>() as f64 / values.len() as f64
}

/// Mean of the `⌊n·share⌋` smallest values; 0.0 when that floor is zero.
fn shortest_share_mean(mut values: Vec<u64>, share: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_unstable();
    let keep = (values.len() as f64 * share).floor() as usize;
    mean(&values[..keep])
}
