//! `lift-core` — foundational types for the liftsim elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`ids`]      | `ElevatorId`, `PassengerId`                         |
//! | [`time`]     | `Tick`                                              |
//! | [`position`] | Exact integer sub-floor `Position`                  |
//! | [`motion`]   | `Direction`, `RunStatus`                            |
//! | [`config`]   | `BuildingConfig`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |
//!           | Required by `lift-traffic` and `lift-engine`.            |

pub mod config;
pub mod ids;
pub mod motion;
pub mod position;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BuildingConfig;
pub use ids::{ElevatorId, PassengerId};
pub use motion::{Direction, RunStatus};
pub use position::{Position, UNITS_PER_FLOOR};
pub use time::Tick;
