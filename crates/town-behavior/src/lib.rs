//! `town-behavior` — what residents decide, do, and say.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                    |
//! |-------------------|-------------------------------------------------------------|
//! | [`context`]       | `TownContext` (read-only frame state), `Narrative` (log/effects sink) |
//! | [`intent`]        | `Intent`: a decision, computed before it is applied        |
//! | [`decision`]      | `decide`, `apply_intent`, want scoring, object/partner search |
//! | [`interaction`]   | starting and finishing object interactions                  |
//! | [`dynamics`]      | per-frame need decay, restoration and skill practice        |
//! | [`social`]        | conversations, the social action table, jealousy            |
//! | [`career`]        | shift schedule, clock-out, promotion contests, resignation  |
//! | [`hooks`]         | `update_frame`, `on_minute`, `on_hour`, `on_day`            |
//! | [`dialogue`]      | `DialogueProvider`, `CannedDialogue`                        |
//! | [`error`]         | `BehaviorError`, `BehaviorResult<T>`                        |
//!
//! # Borrowing model
//!
//! Agents live in one `AgentStore`.  Anything that only reads other agents
//! (deciding, searching for a partner) takes `&AgentStore` and returns a
//! value; the caller then applies it with a short mutable borrow.  Anything
//! that writes two agents at once (a conversation, a gift, a promotion
//! contest) goes through `AgentStore::pair_mut`.  RNGs come from the
//! parallel `AgentRngs`, so they can be borrowed while the store is read.

pub mod career;
pub mod context;
pub mod decision;
pub mod dialogue;
pub mod dynamics;
pub mod error;
pub mod hooks;
pub mod intent;
pub mod interaction;
pub mod social;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use career::{PromotionOutcome, career_satisfaction, check_schedule, clock_out, leave_early, promote, quit_chance};
pub use context::{Narrative, TownContext};
pub use decision::{Want, apply_intent, decide, score_wants};
pub use dialogue::{CannedDialogue, DialogueProvider, line_for};
pub use error::{BehaviorError, BehaviorResult};
pub use hooks::{on_day, on_hour, on_minute, update_frame};
pub use intent::Intent;
pub use interaction::{finish_action, start_interaction};
pub use social::{SOCIAL_ACTIONS, SocialAction, SocialGate, perform_social, start_talk};
