//! One-sided relationship records and their label ladders.
//!
//! Each agent holds its own view of everyone it has met.  Social actions
//! normally update both sides, but the two views drift apart because each
//! side scales deltas by its own social modifier.

use std::fmt;

use rustc_hash::FxHashMap;

use town_core::AgentId;

/// Bound of both relationship axes (`-100..=100`).
pub const REL_LIMIT: f32 = 100.0;

/// Share of a romance delta that also lands on friendship.
pub const ROMANCE_FRIENDSHIP_SPILL: f32 = 0.3;

/// Romance above this counts toward "already has another lover".
pub const COMMITTED_ROMANCE: f32 = 80.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RelAxis {
    Friendship,
    Romance,
}

impl RelAxis {
    pub fn as_str(self) -> &'static str {
        match self {
            RelAxis::Friendship => "friendship",
            RelAxis::Romance    => "romance",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationship {
    pub friendship:  f32,
    pub romance:     f32,
    pub is_lover:    bool,
    /// Set by the first successful romantic action; unlocks the rest of the
    /// romance ladder.
    pub has_romance: bool,
}

impl Relationship {
    /// Add `delta` on `axis`, clamped.  Romance changes also move
    /// friendship by [`ROMANCE_FRIENDSHIP_SPILL`] of the delta.
    pub fn adjust(&mut self, axis: RelAxis, delta: f32) {
        match axis {
            RelAxis::Friendship => {
                self.friendship = (self.friendship + delta).clamp(-REL_LIMIT, REL_LIMIT);
            }
            RelAxis::Romance => {
                self.romance = (self.romance + delta).clamp(-REL_LIMIT, REL_LIMIT);
                self.friendship =
                    (self.friendship + delta * ROMANCE_FRIENDSHIP_SPILL).clamp(-REL_LIMIT, REL_LIMIT);
            }
        }
    }

    #[inline]
    pub fn value(&self, axis: RelAxis) -> f32 {
        match axis {
            RelAxis::Friendship => self.friendship,
            RelAxis::Romance    => self.romance,
        }
    }

    pub fn romance_label(&self) -> RomanceLabel {
        RomanceLabel::of(self)
    }

    pub fn friend_label(&self) -> FriendLabel {
        FriendLabel::of(self.friendship)
    }

    fn sanitize(&mut self) {
        let fix = |v: f32| if v.is_finite() { v.clamp(-REL_LIMIT, REL_LIMIT) } else { 0.0 };
        self.friendship = fix(self.friendship);
        self.romance = fix(self.romance);
    }
}

// ── Labels ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RomanceLabel {
    Lover,
    Adoring,
    Fond,
    Flirty,
    Attracted,
    Smitten,
    Indifferent,
    PutOff,
    Averse,
    Loathing,
}

impl RomanceLabel {
    pub fn of(rel: &Relationship) -> RomanceLabel {
        let r = rel.romance;
        if rel.is_lover {
            RomanceLabel::Lover
        } else if r > 80.0 {
            RomanceLabel::Adoring
        } else if r > 60.0 {
            RomanceLabel::Fond
        } else if r > 40.0 {
            RomanceLabel::Flirty
        } else if r > 20.0 {
            RomanceLabel::Attracted
        } else if r > 10.0 {
            RomanceLabel::Smitten
        } else if r >= 0.0 {
            RomanceLabel::Indifferent
        } else if r > -30.0 {
            RomanceLabel::PutOff
        } else if r > -60.0 {
            RomanceLabel::Averse
        } else {
            RomanceLabel::Loathing
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RomanceLabel::Lover       => "lover",
            RomanceLabel::Adoring     => "adoring",
            RomanceLabel::Fond        => "fond",
            RomanceLabel::Flirty      => "flirty",
            RomanceLabel::Attracted   => "attracted",
            RomanceLabel::Smitten     => "smitten",
            RomanceLabel::Indifferent => "indifferent",
            RomanceLabel::PutOff      => "put off",
            RomanceLabel::Averse      => "averse",
            RomanceLabel::Loathing    => "loathing",
        }
    }

    /// Transitions into these labels are written to the relationship log.
    pub fn is_milestone(self) -> bool {
        matches!(self, RomanceLabel::Lover | RomanceLabel::Adoring)
    }
}

impl fmt::Display for RomanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FriendLabel {
    BestFriend,
    GoodFriend,
    Friend,
    Acquaintance,
    Stranger,
    Irritant,
    Friction,
    Rival,
    Nemesis,
}

impl FriendLabel {
    pub fn of(friendship: f32) -> FriendLabel {
        let v = friendship;
        if v > 80.0 {
            FriendLabel::BestFriend
        } else if v > 50.0 {
            FriendLabel::GoodFriend
        } else if v > 30.0 {
            FriendLabel::Friend
        } else if v > 10.0 {
            FriendLabel::Acquaintance
        } else if v >= -10.0 {
            FriendLabel::Stranger
        } else if v >= -30.0 {
            FriendLabel::Irritant
        } else if v >= -50.0 {
            FriendLabel::Friction
        } else if v >= -80.0 {
            FriendLabel::Rival
        } else {
            FriendLabel::Nemesis
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FriendLabel::BestFriend   => "best friend",
            FriendLabel::GoodFriend   => "good friend",
            FriendLabel::Friend       => "friend",
            FriendLabel::Acquaintance => "acquaintance",
            FriendLabel::Stranger     => "stranger",
            FriendLabel::Irritant     => "irritant",
            FriendLabel::Friction     => "friction",
            FriendLabel::Rival        => "rival",
            FriendLabel::Nemesis      => "nemesis",
        }
    }

    pub fn is_milestone(self) -> bool {
        matches!(self, FriendLabel::BestFriend | FriendLabel::Nemesis)
    }
}

impl fmt::Display for FriendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Relationships ─────────────────────────────────────────────────────────────

/// This agent's view of everyone it has met, created lazily.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Relationships(FxHashMap<AgentId, Relationship>);

impl Relationships {
    pub fn get(&self, other: AgentId) -> Option<&Relationship> {
        self.0.get(&other)
    }

    /// The record for `other`, created at zero if absent.
    pub fn entry(&mut self, other: AgentId) -> &mut Relationship {
        self.0.entry(other).or_default()
    }

    /// Value on `axis` with `other`; 0 for strangers.
    pub fn value(&self, other: AgentId, axis: RelAxis) -> f32 {
        self.get(other).map_or(0.0, |r| r.value(axis))
    }

    pub fn adjust(&mut self, other: AgentId, axis: RelAxis, delta: f32) {
        self.entry(other).adjust(axis, delta);
    }

    /// The lover with the lowest id, if any.
    pub fn lover(&self) -> Option<AgentId> {
        self.0.iter().filter(|(_, r)| r.is_lover).map(|(&id, _)| id).min()
    }

    /// Committed to someone other than `except` (lover with romance > 80).
    pub fn has_other_partner(&self, except: AgentId) -> bool {
        self.0
            .iter()
            .any(|(&id, r)| id != except && r.is_lover && r.romance > COMMITTED_ROMANCE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Relationship)> {
        self.0.iter().map(|(&id, r)| (id, r))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop the record for `other` (used when an agent leaves town).
    pub fn forget(&mut self, other: AgentId) {
        self.0.remove(&other);
    }

    /// Insert a restored record, clamping values into range.
    pub fn restore(&mut self, other: AgentId, mut rel: Relationship) {
        rel.sanitize();
        self.0.insert(other, rel);
    }
}
