//! Building configuration.

/// Static description of the building a simulation runs in.
///
/// Constructed by the application (usually from the `building` section of a
/// traffic scenario file, see `lift-traffic`) and passed to the simulation
/// builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    /// Number of floors, numbered `0 ..= floors_count - 1`.
    pub floors_count: usize,

    /// Number of elevators, id'd `0 ..= elevators_count - 1`.
    pub elevators_count: usize,

    /// Passenger capacity of every cabin.
    pub max_capacity: usize,

    /// Per-elevator energy drawn per moved tick.  Resolved at load time:
    /// always `elevators_count` entries, missing ones default to 1.0.
    pub energy_rates: Vec<f64>,

    /// Human-readable scenario name this building came from.
    pub scenario: String,

    /// Max tick the scenario is expected to run; at `tick >= duration` every
    /// unfinished passenger is force-cancelled.  0 disables the cutoff.
    pub duration: u64,
}

impl BuildingConfig {
    /// Energy rate for elevator `idx`, defaulting to 1.0 past the table end.
    #[inline]
    pub fn energy_rate(&self, idx: usize) -> f64 {
        self.energy_rates.get(idx).copied().unwrap_or(1.0)
    }

    /// `true` if `floor` addresses an existing floor of this building.
    #[inline]
    pub fn is_valid_floor(&self, floor: i32) -> bool {
        floor >= 0 && (floor as usize) < self.floors_count
    }

    /// Highest addressable floor number.
    #[inline]
    pub fn top_floor(&self) -> i32 {
        self.floors_count as i32 - 1
    }
}
