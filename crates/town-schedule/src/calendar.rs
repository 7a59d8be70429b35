//! Holidays and weekend rules.

use town_core::GameTime;

/// A fixed-date public holiday.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Holiday {
    pub month: u8,
    pub date:  u8,
    pub name:  &'static str,
}

pub const HOLIDAYS: [Holiday; 5] = [
    Holiday { month: 1,  date: 1,  name: "New Year" },
    Holiday { month: 2,  date: 14, name: "Valentine's Day" },
    Holiday { month: 5,  date: 1,  name: "Labour Day" },
    Holiday { month: 10, date: 1,  name: "National Day" },
    Holiday { month: 12, date: 25, name: "Christmas" },
];

/// How the calendar treats a given day.  A holiday that falls on a weekend
/// counts as a holiday.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DayKind {
    Holiday(&'static str),
    Weekend,
    Workday,
}

impl DayKind {
    pub fn of(time: &GameTime) -> DayKind {
        if let Some(h) = HOLIDAYS.iter().find(|h| h.month == time.month && h.date == time.date) {
            DayKind::Holiday(h.name)
        } else if time.is_weekend() {
            DayKind::Weekend
        } else {
            DayKind::Workday
        }
    }

    #[inline]
    pub fn is_holiday(self) -> bool {
        matches!(self, DayKind::Holiday(_))
    }
}
