//! What an object is for.
//!
//! Content files carry utilities as short string tags (`"energy"`,
//! `"cinema_imax"`, `"skill_music"`).  They are parsed once, when the catalog
//! is built, into [`Utility`]; everything downstream matches on the enum.
//! Parametrised tags are recognised by prefix, and any tag the engine does
//! not know still parses, as [`Utility::Other`], so new content degrades to
//! the generic "use it for a while" behaviour instead of failing.

use std::fmt;

use town_core::{Need, Skill};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Utility {
    // ── Need-restoring ────────────────────────────────────────────────────
    Energy,
    Hunger,
    Bladder,
    Hygiene,
    Fun,
    /// Seating.  Sofas and benches also give an energy trickle.
    Comfort,

    // ── Leisure and errands ───────────────────────────────────────────────
    /// `cinema_<format>`, e.g. `cinema_imax`.
    Cinema(String),
    GymRun,
    GymYoga,
    EatOut,
    BuyDrink,
    BuyBook,
    BuyGift,
    Computer,
    Art,
    Play,

    // ── Skill practice ────────────────────────────────────────────────────
    Gardening,
    Fishing,
    Cooking,
    /// `skill_<skill>`, e.g. `skill_music`.
    Skill(Skill),

    /// A workstation.  Which job may use it is decided by its label.
    Work,

    /// Scenery; never chosen as an interaction target.
    Decor,

    /// Any tag not listed above.
    Other(String),
}

impl Utility {
    /// Parse a content tag.  Never fails; unknown tags become `Other`.
    pub fn parse(tag: &str) -> Utility {
        let tag = tag.trim();
        match tag {
            "energy"    => Utility::Energy,
            "hunger"    => Utility::Hunger,
            "bladder"   => Utility::Bladder,
            "hygiene"   => Utility::Hygiene,
            "fun"       => Utility::Fun,
            "comfort"   => Utility::Comfort,
            "gym_run"   => Utility::GymRun,
            "gym_yoga"  => Utility::GymYoga,
            "eat_out"   => Utility::EatOut,
            "buy_drink" => Utility::BuyDrink,
            "buy_book"  => Utility::BuyBook,
            "buy_gift"  => Utility::BuyGift,
            "computer"  => Utility::Computer,
            "art"       => Utility::Art,
            "play"      => Utility::Play,
            "gardening" => Utility::Gardening,
            "fishing"   => Utility::Fishing,
            "cooking"   => Utility::Cooking,
            "work"      => Utility::Work,
            "decor" | "none" | "" => Utility::Decor,
            _ => {
                if let Some(format) = tag.strip_prefix("cinema_") {
                    return Utility::Cinema(format.to_owned());
                }
                if let Some(skill) = tag.strip_prefix("skill_") {
                    if let Ok(skill) = skill.parse::<Skill>() {
                        return Utility::Skill(skill);
                    }
                }
                Utility::Other(tag.to_owned())
            }
        }
    }

    /// The content tag this utility was parsed from.
    pub fn tag(&self) -> String {
        match self {
            Utility::Energy     => "energy".into(),
            Utility::Hunger     => "hunger".into(),
            Utility::Bladder    => "bladder".into(),
            Utility::Hygiene    => "hygiene".into(),
            Utility::Fun        => "fun".into(),
            Utility::Comfort    => "comfort".into(),
            Utility::Cinema(f)  => format!("cinema_{f}"),
            Utility::GymRun     => "gym_run".into(),
            Utility::GymYoga    => "gym_yoga".into(),
            Utility::EatOut     => "eat_out".into(),
            Utility::BuyDrink   => "buy_drink".into(),
            Utility::BuyBook    => "buy_book".into(),
            Utility::BuyGift    => "buy_gift".into(),
            Utility::Computer   => "computer".into(),
            Utility::Art        => "art".into(),
            Utility::Play       => "play".into(),
            Utility::Gardening  => "gardening".into(),
            Utility::Fishing    => "fishing".into(),
            Utility::Cooking    => "cooking".into(),
            Utility::Skill(s)   => format!("skill_{s}"),
            Utility::Work       => "work".into(),
            Utility::Decor      => "decor".into(),
            Utility::Other(t)   => t.clone(),
        }
    }

    /// The need this object restores directly, if any.
    pub fn restores(&self) -> Option<Need> {
        match self {
            Utility::Energy  => Some(Need::Energy),
            Utility::Hunger  => Some(Need::Hunger),
            Utility::Bladder => Some(Need::Bladder),
            Utility::Hygiene => Some(Need::Hygiene),
            Utility::Fun     => Some(Need::Fun),
            _ => None,
        }
    }

    /// `buy_*` utilities: a purchase, not a place to restore needs.
    pub fn is_purchase(&self) -> bool {
        matches!(self, Utility::BuyDrink | Utility::BuyBook | Utility::BuyGift)
    }

    #[inline]
    pub fn is_interactable(&self) -> bool {
        !matches!(self, Utility::Decor)
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl From<&str> for Utility {
    fn from(tag: &str) -> Self {
        Utility::parse(tag)
    }
}

impl From<String> for Utility {
    fn from(tag: String) -> Self {
        Utility::parse(&tag)
    }
}

impl From<Utility> for String {
    fn from(u: Utility) -> Self {
        u.tag()
    }
}
