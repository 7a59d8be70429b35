//! Immutable personality and the numeric modifiers derived from it.

use std::fmt;
use std::str::FromStr;

use town_core::{Need, Skill};

use crate::AgentError;

// ── Temperament ───────────────────────────────────────────────────────────────

/// Four-letter temperament code (`E/I`, `N/S`, `F/T`, `J/P`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Temperament {
    pub extravert: bool,
    pub intuitive: bool,
    pub feeling:   bool,
    pub judging:   bool,
}

impl Temperament {
    /// All 16 codes, in bit order.
    pub fn all() -> impl Iterator<Item = Temperament> {
        (0u8..16).map(|bits| Temperament {
            extravert: bits & 8 != 0,
            intuitive: bits & 4 != 0,
            feeling:   bits & 2 != 0,
            judging:   bits & 1 != 0,
        })
    }

    pub fn letters(self) -> [char; 4] {
        [
            if self.extravert { 'E' } else { 'I' },
            if self.intuitive { 'N' } else { 'S' },
            if self.feeling { 'F' } else { 'T' },
            if self.judging { 'J' } else { 'P' },
        ]
    }

    /// Number of letters shared with `other` (0..=4).
    pub fn shared_letters(self, other: Temperament) -> i32 {
        self.letters().iter().zip(other.letters().iter()).filter(|(a, b)| a == b).count() as i32
    }
}

impl fmt::Display for Temperament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.letters() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Temperament {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        let c: Vec<char> = code.chars().collect();
        let bad = || AgentError::Parse(format!("invalid temperament {s:?}"));
        if c.len() != 4 {
            return Err(bad());
        }
        let pick = |ch: char, yes: char, no: char| match ch {
            x if x == yes => Ok(true),
            x if x == no => Ok(false),
            _ => Err(bad()),
        };
        Ok(Temperament {
            extravert: pick(c[0], 'E', 'I')?,
            intuitive: pick(c[1], 'N', 'S')?,
            feeling:   pick(c[2], 'F', 'T')?,
            judging:   pick(c[3], 'J', 'P')?,
        })
    }
}

impl TryFrom<String> for Temperament {
    type Error = AgentError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Temperament> for String {
    fn from(t: Temperament) -> Self {
        t.to_string()
    }
}

// ── Element ───────────────────────────────────────────────────────────────────

/// Zodiac element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    /// +2 for the same element, +1 for the complementary one
    /// (fire/air, earth/water), -1 otherwise.
    pub fn affinity(self, other: Element) -> i32 {
        use Element::*;
        match (self, other) {
            (a, b) if a == b => 2,
            (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => 1,
            _ => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire  => "fire",
            Element::Earth => "earth",
            Element::Air   => "air",
            Element::Water => "water",
        }
    }
}

// ── Gender / orientation / goal ───────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Gender {
    Male,
    Female,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    Hetero,
    Homo,
    Bi,
}

impl Orientation {
    /// Whether someone of gender `own` with this orientation can be
    /// romantically interested in someone of gender `other`.
    pub fn allows(self, own: Gender, other: Gender) -> bool {
        match self {
            Orientation::Bi     => true,
            Orientation::Hetero => own != other,
            Orientation::Homo   => own == other,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LifeGoal {
    Millionaire,
    Scholar,
    Socialite,
    Romantic,
    Easygoing,
}

impl LifeGoal {
    pub const ALL: [LifeGoal; 5] = [
        LifeGoal::Millionaire,
        LifeGoal::Scholar,
        LifeGoal::Socialite,
        LifeGoal::Romantic,
        LifeGoal::Easygoing,
    ];
}

// ── Personality ───────────────────────────────────────────────────────────────

/// Everything about a resident that is fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Personality {
    pub temperament:  Temperament,
    pub element:      Element,
    pub gender:       Gender,
    pub orientation:  Orientation,
    /// 0..=100; high values resist infidelity.
    pub faithfulness: f32,
    pub life_goal:    LifeGoal,
}

impl Personality {
    /// Compatibility with `other`: shared temperament letters plus element
    /// affinity, never negative.
    pub fn compatibility(&self, other: &Personality) -> i32 {
        (self.temperament.shared_letters(other.temperament) + self.element.affinity(other.element)).max(0)
    }

    pub fn attracted_to(&self, other: &Personality) -> bool {
        self.orientation.allows(self.gender, other.gender)
    }
}

// ── TraitModifiers ────────────────────────────────────────────────────────────

/// Multipliers derived once from [`Personality`] and cached on the agent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitModifiers {
    /// Need-decay multiplier, indexed by `Need::index()`.
    pub metabolism: [f32; Need::COUNT],
    /// Skill-gain multiplier ("talent"), indexed by `Skill::index()`.
    pub talent:     [f32; Skill::COUNT],
    /// Scales every relationship delta this agent receives from socialising.
    pub social:     f32,
}

impl TraitModifiers {
    pub fn derive(p: &Personality) -> Self {
        let mut metabolism = [1.0f32; Need::COUNT];
        let mut talent = [1.0f32; Skill::COUNT];
        let mut social = 1.0f32;
        let t = p.temperament;

        let m = |n: Need| n.index();
        let s = |k: Skill| k.index();

        if t.extravert {
            metabolism[m(Need::Social)] = 1.5;
            social *= 1.1;
        } else {
            metabolism[m(Need::Social)] = 0.7;
        }

        if t.intuitive {
            talent[s(Skill::Logic)] = 1.3;
            talent[s(Skill::Creativity)] = 1.3;
            talent[s(Skill::Music)] = 1.2;
        } else {
            talent[s(Skill::Cooking)] = 1.3;
            talent[s(Skill::Athletics)] = 1.3;
            talent[s(Skill::Gardening)] = 1.3;
        }

        if t.feeling {
            social *= 1.3;
            talent[s(Skill::Dancing)] = 1.2;
        } else {
            social *= 0.8;
            talent[s(Skill::Logic)] *= 1.2;
        }

        if t.judging {
            metabolism[m(Need::Hygiene)] = 0.8;
            metabolism[m(Need::Energy)] = 0.9;
        } else {
            metabolism[m(Need::Fun)] = 1.4;
            talent[s(Skill::Creativity)] *= 1.1;
        }

        match p.element {
            Element::Fire => {
                talent[s(Skill::Athletics)] *= 1.2;
                metabolism[m(Need::Energy)] *= 0.9;
            }
            Element::Earth => {
                talent[s(Skill::Gardening)] *= 1.2;
                talent[s(Skill::Cooking)] *= 1.2;
                metabolism[m(Need::Hunger)] *= 0.8;
            }
            Element::Air => {
                talent[s(Skill::Logic)] *= 1.1;
                talent[s(Skill::Music)] *= 1.2;
                metabolism[m(Need::Social)] *= 1.2;
            }
            Element::Water => {
                talent[s(Skill::Creativity)] *= 1.3;
                talent[s(Skill::Dancing)] *= 1.1;
            }
        }

        Self { metabolism, talent, social }
    }

    #[inline]
    pub fn metabolism(&self, need: Need) -> f32 {
        self.metabolism[need.index()]
    }

    #[inline]
    pub fn talent(&self, skill: Skill) -> f32 {
        self.talent[skill.index()]
    }
}
