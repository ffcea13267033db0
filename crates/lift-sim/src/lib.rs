//! `lift-sim` — the deterministic tick pipeline of the liftsim simulator.
//!
//! # Four-phase tick
//!
//! ```text
//! for each tick:
//!   ① Status   — adopt queued targets, advance speed phases
//!   ② Arrivals — materialize due traffic onto the hall queues
//!   ③ Movement — advance cabins, observe deceleration and arrival
//!   ④ Stops    — alight, board, idle notifications
//! ```
//!
//! Cabins are visited in ascending id within every phase and no phase
//! consults a clock, RNG, or I/O, so a run is a pure function of
//! `(building, traffic, command sequence)` — byte-identical journals on
//! every replay.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_sim::SimBuilder;
//!
//! let scenario = lift_traffic::load_scenario(path)?;
//! let mut sim = SimBuilder::new(scenario.building)
//!     .pattern(scenario.pattern)
//!     .build()?;
//! sim.go_to_floor(ElevatorId(0), 5, true)?;
//! let events = sim.step(20)?;
//! let report = sim.metrics();
//! ```

pub mod builder;
pub mod error;
pub mod events;
pub mod metrics;
pub mod pipeline;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use events::{EventKind, SimulationEvent, StopReason};
pub use metrics::MetricsReport;
pub use pipeline::Sim;
pub use state::SimulationState;
