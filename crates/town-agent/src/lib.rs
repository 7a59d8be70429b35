//! `town-agent` — the resident entity and the store that owns them.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`personality`]   | `Temperament`, `Element`, `Gender`, `Orientation`, `LifeGoal`, `TraitModifiers` |
//! | [`needs`]         | `Needs`, `Skills` (clamped fixed arrays)                  |
//! | [`buff`]          | `BuffKind`, `Buff`, `Buffs`                               |
//! | [`relationship`]  | `Relationship`, `Relationships`, label ladders            |
//! | [`wallet`]        | `Wallet` (money, daily budget and counters)               |
//! | [`career`]        | `Career` (job, performance, early-leave marker)           |
//! | [`action`]        | `Action`, `InteractionTarget`, `Behavior`, `Bubble`       |
//! | [`agent`]         | `Agent`                                                   |
//! | [`builder`]       | `AgentBuilder`, `pick_initial_job`                        |
//! | [`store`]         | `AgentStore`, `AgentRngs`                                 |
//! | [`error`]         | `AgentError`, `AgentResult<T>`                            |
//!
//! # Layout choice
//!
//! Agents are stored as an array of structs.  A town holds a handful of
//! residents, each update touches most of one agent's fields, and social
//! interactions need two whole agents at once (`AgentStore::pair_mut`), so
//! per-field columns would buy nothing.  RNGs still live in a parallel
//! [`AgentRngs`] so an agent's RNG can be borrowed mutably while the store
//! is read.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.         |

pub mod action;
pub mod agent;
pub mod buff;
pub mod builder;
pub mod career;
pub mod error;
pub mod needs;
pub mod personality;
pub mod relationship;
pub mod store;
pub mod wallet;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::{Action, Behavior, Bubble, BubbleTone, InteractionTarget, SideHustle, VirtualTarget};
pub use agent::{Agent, Appearance};
pub use buff::{Buff, BuffKind, Buffs, Polarity};
pub use builder::{AgentBuilder, pick_initial_job};
pub use career::Career;
pub use error::{AgentError, AgentResult};
pub use needs::{Needs, Skills};
pub use personality::{Element, Gender, LifeGoal, Orientation, Personality, Temperament, TraitModifiers};
pub use relationship::{FriendLabel, RelAxis, Relationship, Relationships, RomanceLabel};
pub use store::{AgentRngs, AgentStore};
pub use wallet::Wallet;
