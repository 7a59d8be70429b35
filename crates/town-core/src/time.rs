//! Game calendar and the frame-driven clock.
//!
//! # Design
//!
//! The host calls [`SimClock::advance`] once per animation frame.  Each call
//! adds `speed` units to an accumulator; once 60 units have accumulated one
//! simulated minute elapses (the remainder is dropped, so at most one minute
//! passes per frame).  Action timers count the same units, which is why
//! durations are written as [`minutes`]`(m)`.
//!
//! The calendar is deliberately simplified: every month has 30 days, every
//! year 12 months, and the weekday cycles 1..=7 independently of the date.

use std::fmt;

/// Speed units that make up one simulated minute.
pub const UNITS_PER_MINUTE: f32 = 60.0;

/// Convert simulated minutes into timer units.
#[inline]
pub fn minutes(m: f32) -> f32 {
    m * UNITS_PER_MINUTE
}

// ── GameTime ──────────────────────────────────────────────────────────────────

/// The current calendar position plus the speed multiplier (0 = paused).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameTime {
    /// Days since the town was founded, starting at 1.
    pub day:     u32,
    pub hour:    u8,
    pub minute:  u8,
    /// 1 = Monday … 7 = Sunday.
    pub weekday: u8,
    pub month:   u8,
    /// Day of month, 1..=30.
    pub date:    u8,
    /// Speed units added per frame.  0 means paused.
    pub speed:   u32,
}

impl Default for GameTime {
    /// Day 1, 08:00, Monday the 1st of month 1, speed 2.
    fn default() -> Self {
        Self { day: 1, hour: 8, minute: 0, weekday: 1, month: 1, date: 1, speed: 2 }
    }
}

impl GameTime {
    /// Narrative timestamp, e.g. `"Day 3 07:05"`.
    pub fn stamp(&self) -> String {
        format!("Day {} {:02}:{:02}", self.day, self.hour, self.minute)
    }

    #[inline]
    pub fn is_weekend(&self) -> bool {
        self.weekday >= 6
    }

    /// Minutes elapsed since midnight.
    #[inline]
    pub fn minute_of_day(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Advance the calendar by one day, wrapping date, month and weekday.
    pub fn roll_day(&mut self) {
        self.day += 1;
        self.date += 1;
        if self.date > 30 {
            self.date = 1;
            self.month += 1;
            if self.month > 12 {
                self.month = 1;
            }
        }
        self.weekday = self.weekday % 7 + 1;
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Day {} {:02}:{:02} (weekday {}, {:02}/{:02})",
            self.day, self.hour, self.minute, self.weekday, self.month, self.date
        )
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Boundaries crossed by one [`SimClock::advance`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockEvents {
    pub minute: bool,
    pub hour:   bool,
    pub day:    bool,
}

/// Frame-driven clock.  Cheap to copy; holds no heap data.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    pub time:    GameTime,
    accumulator: u32,
}

impl SimClock {
    pub fn new(time: GameTime) -> Self {
        Self { time, accumulator: 0 }
    }

    /// Add one frame's worth of speed units and report which boundaries
    /// were crossed.  A paused clock reports nothing.
    pub fn advance(&mut self) -> ClockEvents {
        let mut events = ClockEvents::default();
        if self.time.speed == 0 {
            return events;
        }

        self.accumulator += self.time.speed;
        if self.accumulator < UNITS_PER_MINUTE as u32 {
            return events;
        }
        self.accumulator = 0;

        self.time.minute += 1;
        events.minute = true;
        if self.time.minute >= 60 {
            self.time.minute = 0;
            self.time.hour += 1;
            events.hour = true;
            if self.time.hour >= 24 {
                self.time.hour = 0;
                self.time.roll_day();
                events.day = true;
            }
        }
        events
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.time.speed == 0
    }

    #[inline]
    pub fn set_speed(&mut self, speed: u32) {
        self.time.speed = speed;
    }
}
