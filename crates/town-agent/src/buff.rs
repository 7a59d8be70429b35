//! Timed mood modifiers.

use std::fmt;

/// Each active buff moves mood by this much, up for good ones and down for
/// bad ones.
pub const BUFF_MOOD_DELTA: f32 = 15.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Polarity {
    Good,
    Bad,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BuffKind {
    WellRested,
    InLove,
    RichFeel,
    GamerJoy,
    MovieFun,
    GoodMeal,
    HolidayJoy,
    WeekendVibes,
    SideHustleWin,
    Promoted,
    ArtInspired,
    Playful,
    Stressed,
    Heartbroken,
    Broke,
    Anxious,
    Demoted,
    Fired,
}

impl BuffKind {
    pub fn polarity(self) -> Polarity {
        use BuffKind::*;
        match self {
            Stressed | Heartbroken | Broke | Anxious | Demoted | Fired => Polarity::Bad,
            _ => Polarity::Good,
        }
    }

    /// Full duration in simulated minutes.
    pub fn duration(self) -> u32 {
        use BuffKind::*;
        match self {
            WellRested    => 180,
            InLove        => 300,
            RichFeel      => 120,
            GamerJoy      => 90,
            MovieFun      => 120,
            GoodMeal      => 120,
            HolidayJoy    => 240,
            WeekendVibes  => 200,
            SideHustleWin => 90,
            Promoted      => 240,
            ArtInspired   => 150,
            Playful       => 100,
            Stressed      => 120,
            Heartbroken   => 400,
            Broke         => 120,
            Anxious       => 60,
            Demoted       => 240,
            Fired         => 300,
        }
    }

    pub fn as_str(self) -> &'static str {
        use BuffKind::*;
        match self {
            WellRested    => "well_rested",
            InLove        => "in_love",
            RichFeel      => "rich_feel",
            GamerJoy      => "gamer_joy",
            MovieFun      => "movie_fun",
            GoodMeal      => "good_meal",
            HolidayJoy    => "holiday_joy",
            WeekendVibes  => "weekend_vibes",
            SideHustleWin => "side_hustle_win",
            Promoted      => "promoted",
            ArtInspired   => "art_inspired",
            Playful       => "playful",
            Stressed      => "stressed",
            Heartbroken   => "heartbroken",
            Broke         => "broke",
            Anxious       => "anxious",
            Demoted       => "demoted",
            Fired         => "fired",
        }
    }
}

impl fmt::Display for BuffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One active buff.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    pub kind:      BuffKind,
    /// Minutes left; the buff is removed when this reaches 0.
    pub remaining: u32,
}

/// Active buffs in the order they were first applied.  At most one entry
/// per kind.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buffs(Vec<Buff>);

impl Buffs {
    /// Apply `kind` at full duration.  An active buff of the same kind is
    /// refreshed in place rather than stacked.
    pub fn add(&mut self, kind: BuffKind) {
        match self.0.iter_mut().find(|b| b.kind == kind) {
            Some(b) => b.remaining = kind.duration(),
            None => self.0.push(Buff { kind, remaining: kind.duration() }),
        }
    }

    #[inline]
    pub fn has(&self, kind: BuffKind) -> bool {
        self.0.iter().any(|b| b.kind == kind)
    }

    /// One simulated minute passes: every buff loses one minute and expired
    /// ones are dropped.
    pub fn tick_minute(&mut self) {
        for b in &mut self.0 {
            b.remaining = b.remaining.saturating_sub(1);
        }
        self.0.retain(|b| b.remaining > 0);
    }

    /// Net mood contribution of all active buffs.
    pub fn mood_delta(&self) -> f32 {
        self.0
            .iter()
            .map(|b| match b.kind.polarity() {
                Polarity::Good => BUFF_MOOD_DELTA,
                Polarity::Bad => -BUFF_MOOD_DELTA,
            })
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Buff> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rebuild from restored entries: duplicate kinds collapse to the first,
    /// remaining time is capped at the kind's full duration and zero entries
    /// are dropped.
    pub fn restore(entries: impl IntoIterator<Item = Buff>) -> Self {
        let mut out = Buffs::default();
        for b in entries {
            if b.remaining == 0 || out.has(b.kind) {
                continue;
            }
            out.0.push(Buff { kind: b.kind, remaining: b.remaining.min(b.kind.duration()) });
        }
        out
    }
}
