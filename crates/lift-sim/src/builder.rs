//! Fluent builder for constructing a [`Sim`].

use lift_core::BuildingConfig;
use lift_traffic::{TrafficPattern, TrafficQueue};

use crate::{Sim, SimError, SimResult, SimulationState};

/// Builder for [`Sim`].
///
/// # Required inputs
///
/// - [`BuildingConfig`] — floors, elevators, capacity, energy rates,
///   duration.
///
/// # Optional inputs
///
/// | Method        | Default                              |
/// |---------------|--------------------------------------|
/// | `.pattern(p)` | Empty traffic (command-driven runs)  |
///
/// # Example
///
/// ```rust,ignore
/// let scenario = lift_traffic::load_scenario(path)?;
/// let mut sim = SimBuilder::new(scenario.building)
///     .pattern(scenario.pattern)
///     .build()?;
/// let events = sim.step(10)?;
/// ```
pub struct SimBuilder {
    building: BuildingConfig,
    pattern:  Option<TrafficPattern>,
}

impl SimBuilder {
    pub fn new(building: BuildingConfig) -> Self {
        Self { building, pattern: None }
    }

    /// Supply the traffic pattern to run.  A pattern carrying its own
    /// `energy_rates` overrides the building's table.
    pub fn pattern(mut self, pattern: TrafficPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Validate inputs and return a ready-to-step [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let mut building = self.building;

        // ── Validate the building ─────────────────────────────────────────
        if building.floors_count == 0 {
            return Err(SimError::Config("building needs at least one floor".into()));
        }
        if building.elevators_count == 0 {
            return Err(SimError::Config("building needs at least one elevator".into()));
        }
        if building.max_capacity == 0 {
            return Err(SimError::Config("elevator capacity must be positive".into()));
        }

        let pattern = self.pattern.unwrap_or_else(|| {
            TrafficPattern::new(building.scenario.clone(), "", Vec::new(), building.duration)
        });

        // ── Validate the pattern against the building ─────────────────────
        for entry in pattern.entries() {
            if !building.is_valid_floor(entry.origin) || !building.is_valid_floor(entry.destination)
            {
                return Err(SimError::Config(format!(
                    "traffic entry {} travels {} -> {}, outside 0..{}",
                    entry.id, entry.origin, entry.destination, building.floors_count
                )));
            }
        }

        // ── Scenario-level energy override ────────────────────────────────
        if let Some(rates) = &pattern.energy_rates {
            let mut rates = rates.clone();
            rates.resize(building.elevators_count, 1.0);
            building.energy_rates = rates;
        }

        let state = SimulationState::new(&building);
        let traffic = TrafficQueue::from_pattern(&pattern);
        Ok(Sim::assemble(building, state, traffic))
    }
}
