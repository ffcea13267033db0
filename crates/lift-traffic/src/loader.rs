//! JSON scenario loader.
//!
//! # File format
//!
//! ```json
//! {
//!   "building": {
//!     "floors": 8, "elevators": 2, "elevator_capacity": 10,
//!     "elevator_energy_rates": [1.0, 2.5],
//!     "scenario": "morning_rush", "duration": 1000
//!   },
//!   "description": "optional free text",
//!   "metadata": { "author": "..." },
//!   "traffic": [
//!     { "id": 0, "origin": 0, "destination": 5, "tick": 3 }
//!   ]
//! }
//! ```
//!
//! `elevator_energy_rates` is optional (all rates default to 1.0) and is
//! padded/truncated to the elevator count.  `traffic` entries need not be
//! pre-sorted; [`TrafficPattern::new`] applies the stable `(tick, id)` sort.

use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{BuildingConfig, PassengerId, Tick};

use crate::{TrafficEntry, TrafficError, TrafficPattern, TrafficResult};

// ── Wire shapes ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScenarioFile {
    building: BuildingSection,
    #[serde(default)]
    description: String,
    #[serde(default)]
    metadata: BTreeMap<String, String>,
    traffic: Vec<TrafficRecord>,
}

#[derive(Deserialize)]
struct BuildingSection {
    floors:            usize,
    elevators:         usize,
    elevator_capacity: usize,
    #[serde(default)]
    elevator_energy_rates: Option<Vec<f64>>,
    scenario: String,
    duration: u64,
}

#[derive(Deserialize)]
struct TrafficRecord {
    id:          u64,
    origin:      i32,
    destination: i32,
    tick:        u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// A fully loaded scenario: the building it runs in plus its traffic.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub building: BuildingConfig,
    pub pattern:  TrafficPattern,
}

/// Load one scenario from a JSON file.
pub fn load_scenario(path: &Path) -> TrafficResult<Scenario> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(std::io::BufReader::new(file))
}

/// Like [`load_scenario`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenarios.
pub fn load_scenario_reader<R: Read>(reader: R) -> TrafficResult<Scenario> {
    let file: ScenarioFile = serde_json::from_reader(reader)?;
    build_scenario(file)
}

/// Load a rotation set of scenarios, one per path, in the given order.
pub fn load_scenarios<P: AsRef<Path>>(paths: &[P]) -> TrafficResult<Vec<Scenario>> {
    paths.iter().map(|p| load_scenario(p.as_ref())).collect()
}

// ── Construction & validation ─────────────────────────────────────────────────

fn build_scenario(file: ScenarioFile) -> TrafficResult<Scenario> {
    let b = file.building;
    let invalid = |reason: String| TrafficError::Validation {
        name: b.scenario.clone(),
        reason,
    };

    if b.floors == 0 {
        return Err(invalid("building must have at least one floor".into()));
    }
    if b.elevators == 0 {
        return Err(invalid("building must have at least one elevator".into()));
    }
    if b.elevator_capacity == 0 {
        return Err(invalid("elevator capacity must be positive".into()));
    }

    let entries: Vec<TrafficEntry> = file
        .traffic
        .iter()
        .map(|r| {
            let in_range = |floor: i32| floor >= 0 && (floor as usize) < b.floors;
            if !in_range(r.origin) || !in_range(r.destination) {
                return Err(invalid(format!(
                    "traffic entry {} references a floor outside 0..{} ({} -> {})",
                    r.id, b.floors, r.origin, r.destination
                )));
            }
            Ok(TrafficEntry {
                id:          PassengerId(r.id),
                origin:      r.origin,
                destination: r.destination,
                tick:        Tick(r.tick),
            })
        })
        .collect::<TrafficResult<_>>()?;

    let mut seen = HashSet::with_capacity(entries.len());
    for e in &entries {
        if !seen.insert(e.id) {
            return Err(invalid(format!("duplicate traffic id {}", e.id.0)));
        }
    }

    // Resolve energy rates to exactly one entry per elevator.
    let declared = b.elevator_energy_rates.clone();
    let mut energy_rates = declared.clone().unwrap_or_default();
    energy_rates.resize(b.elevators, 1.0);

    let building = BuildingConfig {
        floors_count:    b.floors,
        elevators_count: b.elevators,
        max_capacity:    b.elevator_capacity,
        energy_rates,
        scenario:        b.scenario.clone(),
        duration:        b.duration,
    };

    let mut pattern = TrafficPattern::new(b.scenario, file.description, entries, b.duration);
    pattern.metadata = file.metadata;
    pattern.energy_rates = declared;

    Ok(Scenario { building, pattern })
}
