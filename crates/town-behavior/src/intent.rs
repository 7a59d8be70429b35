//! Decisions, computed from immutable reads and applied afterwards.

use town_agent::SideHustle;
use town_core::{AgentId, ObjectId, Vec2};

/// What an idle agent decided to do next.
///
/// Produced by [`decide`](crate::decide) with only shared access to the
/// store, then applied with [`apply_intent`](crate::apply_intent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Walk to `object` and use it.  `side_hustle` marks income activities
    /// of unemployed agents.
    UseObject {
        object:      ObjectId,
        side_hustle: Option<SideHustle>,
    },

    /// Walk to `point` (near `partner`, never onto them) and talk.
    Approach {
        partner: AgentId,
        point:   Vec2,
    },

    /// Stroll to `point` and linger.
    Wander { point: Vec2 },
}
