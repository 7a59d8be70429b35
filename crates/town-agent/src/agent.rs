//! The resident entity.

use town_core::{AgentId, Vec2};

use crate::needs::MAX_LEVEL;
use crate::{
    Behavior, Bubble, BubbleTone, BuffKind, Buffs, Career, Needs, Personality, Relationships, Skills,
    TraitModifiers, Wallet,
};

/// Cosmetic palette indices.  Never read by the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Appearance {
    pub skin:    u8,
    pub hair:    u8,
    pub clothes: u8,
}

/// One simulated resident.
///
/// `Agent` owns everything about itself.  Cross-agent effects (a gift, a
/// conversation) are applied by `town-behavior` through
/// [`AgentStore::pair_mut`](crate::AgentStore::pair_mut).
#[derive(Clone, Debug)]
pub struct Agent {
    pub id:            AgentId,
    pub name:          String,
    pub age:           u8,
    pub appearance:    Appearance,
    pub personality:   Personality,
    /// Cached from `personality` at creation.
    pub modifiers:     TraitModifiers,
    pub needs:         Needs,
    pub skills:        Skills,
    /// Derived: need average plus buff deltas, clamped to `[0, 100]`.
    /// Only [`update_mood`](Self::update_mood) writes it.
    pub mood:          f32,
    pub buffs:         Buffs,
    pub relationships: Relationships,
    pub wallet:        Wallet,
    pub career:        Career,
    pub behavior:      Behavior,
    pub pos:           Vec2,
    /// Base walking speed before the mood modifier.
    pub speed:         f32,
    pub bubble:        Bubble,
}

impl Agent {
    /// Recompute mood from needs and buffs.
    pub fn update_mood(&mut self) {
        let raw = self.needs.average() + self.buffs.mood_delta();
        self.mood = if raw.is_finite() { raw.clamp(0.0, MAX_LEVEL) } else { 0.0 };
    }

    /// Show a speech bubble for `frames` rendered frames.
    pub fn say(&mut self, text: impl Into<String>, tone: BubbleTone, frames: u32) {
        self.bubble.show(text, tone, frames);
    }

    /// Apply (or refresh) a buff and fold it into mood right away.
    pub fn add_buff(&mut self, kind: BuffKind) {
        self.buffs.add(kind);
        self.update_mood();
    }

    #[inline]
    pub fn has_buff(&self, kind: BuffKind) -> bool {
        self.buffs.has(kind)
    }

    /// Cancel whatever the agent is doing.
    #[inline]
    pub fn reset(&mut self) {
        self.behavior.reset();
    }

    /// Free to socialise: neither asleep nor at work.
    #[inline]
    pub fn is_available(&self) -> bool {
        !self.behavior.action.is_unavailable()
    }
}
