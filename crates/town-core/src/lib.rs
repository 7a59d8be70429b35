//! `town-core` — foundational types for the sandbox town engine.
//!
//! This crate is a dependency of every other `town-*` crate.  It has no
//! `town-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ObjectId`, `JobId`                            |
//! | [`geo`]         | `Vec2`, `MapBounds`                                       |
//! | [`time`]        | `GameTime`, `SimClock`, `ClockEvents`, `minutes()`        |
//! | [`rng`]         | `AgentRng` (per-agent, seeded)                            |
//! | [`kinds`]       | `Need`, `Skill`                                           |
//! | [`log`]         | `EventLog`, `LogEntry`, `LogKind`, `LogCategory`          |
//! | [`effects`]     | `Effects`, `Particle` (decorative only)                   |
//! | [`config`]      | `Tuning`, `SimConfig`, `PkWeights`, `PayRate`             |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on public types (saves, TOML).   |

pub mod config;
pub mod effects;
pub mod error;
pub mod geo;
pub mod ids;
pub mod kinds;
pub mod log;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{NeedRates, PayRate, PkTable, PkWeights, SimConfig, Tuning};
pub use effects::{Effects, Particle};
pub use error::{CoreError, CoreResult};
pub use geo::{MapBounds, Vec2};
pub use ids::{AgentId, JobId, ObjectId};
pub use kinds::{Need, Skill};
pub use log::{EventLog, LOG_CAPACITY, LogCategory, LogEntry, LogKind};
pub use rng::AgentRng;
pub use time::{ClockEvents, GameTime, SimClock, UNITS_PER_MINUTE, minutes};
