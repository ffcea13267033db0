//! Traffic patterns: who arrives where, and when.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use lift_core::{PassengerId, Tick};

// ── TrafficEntry ──────────────────────────────────────────────────────────────

/// One scheduled passenger arrival.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficEntry {
    pub id: PassengerId,
    pub origin: i32,
    pub destination: i32,
    /// Earliest tick at which the passenger appears.
    pub tick: Tick,
}

// ── TrafficPattern ────────────────────────────────────────────────────────────

/// A named batch of arrivals plus scenario metadata.
///
/// Entries are stored sorted by `(tick, id)` — a *stable* order, applied on
/// construction, so scenario files are free to list their traffic in any
/// order without affecting determinism.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrafficPattern {
    pub name: String,
    pub description: String,
    entries: Vec<TrafficEntry>,
    pub metadata: BTreeMap<String, String>,

    /// Per-elevator energy rates this scenario prescribes, if any.
    pub energy_rates: Option<Vec<f64>>,

    /// Max tick the scenario is expected to run (0 = open-ended).
    pub duration: u64,
}

impl TrafficPattern {
    /// Build a pattern, sorting `entries` by `(tick, id)`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        mut entries: Vec<TrafficEntry>,
        duration: u64,
    ) -> Self {
        entries.sort_by_key(|e| (e.tick, e.id));
        Self {
            name:         name.into(),
            description:  description.into(),
            entries,
            metadata:     BTreeMap::new(),
            energy_rates: None,
            duration,
        }
    }

    /// All entries, sorted by `(tick, id)`.
    pub fn entries(&self) -> &[TrafficEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The horizon a controller should plan for: the declared `duration`
    /// when set, otherwise the last arrival's tick.
    pub fn max_tick(&self) -> u64 {
        if self.duration > 0 {
            self.duration
        } else {
            self.entries.last().map_or(0, |e| e.tick.0)
        }
    }
}
