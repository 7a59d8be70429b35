//! The fixed need and skill sets.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── Need ──────────────────────────────────────────────────────────────────────

/// A physiological or emotional need, each tracked as a value in `[0, 100]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Need {
    Hunger,
    Energy,
    Fun,
    Social,
    Bladder,
    Hygiene,
}

impl Need {
    pub const COUNT: usize = 6;

    pub const ALL: [Need; Need::COUNT] = [
        Need::Hunger,
        Need::Energy,
        Need::Fun,
        Need::Social,
        Need::Bladder,
        Need::Hygiene,
    ];

    /// Needs that bypass utility scoring when they run low.
    pub const SURVIVAL: [Need; 4] = [Need::Energy, Need::Hunger, Need::Bladder, Need::Hygiene];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Need::Hunger  => "hunger",
            Need::Energy  => "energy",
            Need::Fun     => "fun",
            Need::Social  => "social",
            Need::Bladder => "bladder",
            Need::Hygiene => "hygiene",
        }
    }
}

impl fmt::Display for Need {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Need {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Need::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| CoreError::Parse(format!("unknown need `{s}`")))
    }
}

// ── Skill ─────────────────────────────────────────────────────────────────────

/// A learnable skill, tracked as a value in `[0, 100]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Skill {
    Cooking,
    Athletics,
    Music,
    Dancing,
    Logic,
    Creativity,
    Gardening,
    Fishing,
}

impl Skill {
    pub const COUNT: usize = 8;

    pub const ALL: [Skill; Skill::COUNT] = [
        Skill::Cooking,
        Skill::Athletics,
        Skill::Music,
        Skill::Dancing,
        Skill::Logic,
        Skill::Creativity,
        Skill::Gardening,
        Skill::Fishing,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Skill::Cooking    => "cooking",
            Skill::Athletics  => "athletics",
            Skill::Music      => "music",
            Skill::Dancing    => "dancing",
            Skill::Logic      => "logic",
            Skill::Creativity => "creativity",
            Skill::Gardening  => "gardening",
            Skill::Fishing    => "fishing",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Skill {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::Parse(format!("unknown skill `{s}`")))
    }
}
