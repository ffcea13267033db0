//! `lift-engine` — the service facade of the liftsim simulator.
//!
//! Packages a [`lift_sim::Sim`] behind a single mutex so any number of
//! clients — an HTTP transport, an in-process controller, a test harness —
//! can read state, issue per-elevator targets, advance time, and rotate
//! traffic scenarios with serializable semantics.
//!
//! The transport itself is out of scope: this crate speaks plain Rust types
//! (all serde-ready) and the four-kind [`EngineError`] contract, and a
//! transport layer maps both onto its own encoding.
//!
//! ```rust,ignore
//! use lift_engine::Engine;
//!
//! let engine = Engine::from_paths(&["scenarios/morning.json"])?;
//! let (tick, events) = engine.step(1)?;
//! engine.go_to_floor(ElevatorId(0), 5, false)?;
//! let snapshot = engine.get_state()?;
//! ```

pub mod engine;
pub mod error;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{Engine, TrafficInfo};
pub use error::{EngineError, EngineResult};
