//! A rung on a career ladder.

use std::fmt;
use std::str::FromStr;

use town_core::{GameTime, JobId, PkTable, PkWeights, Skill};

use crate::{DayKind, ScheduleError};

// ── CompanyType ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompanyType {
    /// Only the level-0 "unemployed" sentinel.
    None,
    Internet,
    Design,
    Business,
    Store,
    Restaurant,
}

impl CompanyType {
    pub const ALL: [CompanyType; 6] = [
        CompanyType::None,
        CompanyType::Internet,
        CompanyType::Design,
        CompanyType::Business,
        CompanyType::Store,
        CompanyType::Restaurant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CompanyType::None       => "none",
            CompanyType::Internet   => "internet",
            CompanyType::Design     => "design",
            CompanyType::Business   => "business",
            CompanyType::Store      => "store",
            CompanyType::Restaurant => "restaurant",
        }
    }

    /// Label keyword of the workstations a job at `level` uses.
    pub fn desk_keyword(self, level: u8) -> Option<&'static str> {
        match self {
            CompanyType::None       => None,
            CompanyType::Internet   => Some(if level >= 4 { "CTO desk" } else { "dev desk" }),
            CompanyType::Design     => Some(if level >= 4 { "director desk" } else { "design desk" }),
            CompanyType::Business   => Some(if level >= 4 { "manager desk" } else { "business desk" }),
            CompanyType::Store      => Some("store counter"),
            CompanyType::Restaurant => Some(if level >= 3 { "kitchen" } else { "restaurant counter" }),
        }
    }

    /// The skill that counts in a promotion contest.
    pub fn key_skill(self) -> Option<Skill> {
        match self {
            CompanyType::None       => None,
            CompanyType::Internet   => Some(Skill::Logic),
            CompanyType::Design     => Some(Skill::Creativity),
            CompanyType::Business   => Some(Skill::Logic),
            CompanyType::Store      => Some(Skill::Athletics),
            CompanyType::Restaurant => Some(Skill::Cooking),
        }
    }

    pub fn pk_weights(self, table: &PkTable) -> PkWeights {
        match self {
            CompanyType::Internet   => table.internet,
            CompanyType::Design     => table.design,
            CompanyType::Business   => table.business,
            CompanyType::Store      => table.store,
            CompanyType::Restaurant => table.restaurant,
            CompanyType::None       => PkWeights::new(0.0, 0.0, 0.0),
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyType {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompanyType::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| ScheduleError::Parse(format!("unknown company type {s:?}")))
    }
}

// ── Weekdays ──────────────────────────────────────────────────────────────────

/// Set of weekdays 1..=7 as a bitmask (bit `d` set = works on day `d`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Weekdays(u8);

impl Weekdays {
    pub const NONE: Weekdays = Weekdays(0);

    /// Days `first..=last`.
    pub fn range(first: u8, last: u8) -> Weekdays {
        let mut bits = 0u8;
        for d in first.max(1)..=last.min(7) {
            bits |= 1 << d;
        }
        Weekdays(bits)
    }

    #[inline]
    pub fn contains(self, weekday: u8) -> bool {
        (1..=7).contains(&weekday) && self.0 & (1 << weekday) != 0
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl FromStr for Weekdays {
    type Err = ScheduleError;

    /// Accepts `"1-5"`, `"1,3,5"`, or a mix such as `"1-3,6"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ScheduleError::Parse(format!("invalid weekdays {s:?}: expected e.g. \"1-5\""));
        let mut bits = 0u8;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let day = |t: &str| t.trim().parse::<u8>().map_err(|_| bad());
            let (first, last) = match part.split_once('-') {
                Some((a, b)) => (day(a)?, day(b)?),
                None => (day(part)?, day(part)?),
            };
            if first == 0 || last > 7 || first > last {
                return Err(bad());
            }
            bits |= Weekdays::range(first, last).0;
        }
        Ok(Weekdays(bits))
    }
}

// ── Job ───────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Job {
    pub id:         JobId,
    /// Stable string key (`"developer"`).  Saves refer to jobs by key so that
    /// content edits re-resolve instead of pointing at a stale index.
    pub key:        String,
    pub title:      String,
    pub company:    CompanyType,
    /// 0 only for the unemployed sentinel.
    pub level:      u8,
    pub salary:     i64,
    pub start_hour: u8,
    pub end_hour:   u8,
    pub weekdays:   Weekdays,
}

impl Job {
    #[inline]
    pub fn is_unemployed(&self) -> bool {
        self.level == 0
    }

    /// Shift length in minutes.
    pub fn shift_minutes(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour) as u32 * 60
    }

    /// Scheduled today: employed, not a holiday, and an allowed weekday.
    pub fn works_today(&self, time: &GameTime) -> bool {
        !self.is_unemployed()
            && !DayKind::of(time).is_holiday()
            && self.weekdays.contains(time.weekday)
    }

    /// `true` while the shift is running on a working day.
    pub fn on_shift(&self, time: &GameTime) -> bool {
        self.works_today(time) && time.hour >= self.start_hour && time.hour < self.end_hour
    }

    /// Minutes already worked in today's shift (0 before it starts,
    /// `shift_minutes()` after it ends).
    pub fn minutes_into_shift(&self, time: &GameTime) -> u32 {
        let start = self.start_hour as u32 * 60;
        time.minute_of_day().saturating_sub(start).min(self.shift_minutes())
    }

    pub fn desk_keyword(&self) -> Option<&'static str> {
        self.company.desk_keyword(self.level)
    }
}
