//! `town-mobility` — walking toward a target point and arriving there.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`state`]   | `StepOutcome`, `Travel`: what a movement step produced      |
//! | [`engine`]  | `MobilityEngine`: per-frame stepping, commute cap           |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                         |
//!
//! # Movement model (straight-line walking)
//!
//! 1. `MobilityEngine::head_to` sets the agent's target point and switches
//!    it to `moving` (or `commuting` for work travel).
//! 2. Every frame `MobilityEngine::step` moves the agent straight toward the
//!    target by `speed × mood modifier × dt × 0.1` pixels, clamped to the
//!    map.
//! 3. Once within the stop distance (8 px for objects, 40 px for partners)
//!    the position snaps exactly onto the target, the target is cleared and
//!    the step reports [`StepOutcome::Arrived`].  The caller then starts the
//!    interaction.
//! 4. Commutes are also counted in simulated minutes.  Past the cap,
//!    `MobilityEngine::commute_minute` teleports the agent onto its desk so
//!    the shift still happens.

pub mod engine;
pub mod error;
pub mod state;

#[cfg(test)]
mod tests;

pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use state::{StepOutcome, Travel};
