//! `town-sim` — the frame loop and simulation store for the sandbox town.
//!
//! # Frame loop
//!
//! ```text
//! each frame:
//!   ① Clock    — add `speed` units; 60 units make one simulated minute.
//!   ② Minute   — on_minute for every agent (buffs, commute cap, shifts).
//!   ③ Hour     — on_hour for every agent (money feelings, quitting).
//!   ④ Day      — on_day for every agent, "new day" log line, persist.
//!   ⑤ Agents   — update_frame for every agent, in store order.
//! ```
//!
//! A failing or panicking frame stops the clock instead of crashing the
//! host; see [`Sim::frame`].
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`sim`]        | `Sim`: state, frame loop, UI commands, persistence        |
//! | [`builder`]    | `SimBuilder`                                              |
//! | [`observer`]   | `SimObserver`, `NoopObserver`                             |
//! | [`save`]       | `SaveState`, `AgentRecord`, `SaveStore`, `MemoryStore`    |
//! | [`view`]       | `AgentView`, `BubbleView`                                 |
//! | [`config`]     | TOML loading of `SimConfig`                               |
//! | [`error`]      | `SimError`, `SaveError`                                   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use town_sim::{NoopObserver, SimBuilder, load_or_default};
//!
//! let config = load_or_default(Path::new("town.toml"));
//! let mut sim = SimBuilder::new(config).build()?;
//! sim.run_frames(60 * 60 * 24, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod save;
pub mod sim;
pub mod view;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use config::{load_config, load_or_default, parse_config};
pub use error::{SaveError, SaveResult, SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use save::{AgentRecord, MemoryStore, SAVE_KEY, SAVE_VERSION, SaveState, SaveStore};
pub use sim::Sim;
pub use view::{AgentView, BubbleView};
