//! The narrative event log shown to players.
//!
//! Entries are kept most-recent-first and capped at [`LOG_CAPACITY`].  This is
//! game content, not diagnostics; diagnostics go through `tracing`.

use std::collections::VecDeque;

use crate::GameTime;

/// Maximum number of entries retained.
pub const LOG_CAPACITY: usize = 200;

/// Actor name used for entries not attributed to a resident.
pub const SYSTEM_ACTOR: &str = "system";

/// Free-form type tag of an entry.  Determines its [`LogCategory`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LogKind {
    Sys,
    Money,
    Chat,
    Love,
    Bad,
    RelEvent,
    Jealous,
}

impl LogKind {
    pub fn category(self) -> LogCategory {
        match self {
            LogKind::Sys | LogKind::Money         => LogCategory::Sys,
            LogKind::RelEvent | LogKind::Jealous  => LogCategory::Relationship,
            LogKind::Chat | LogKind::Love | LogKind::Bad => LogCategory::Chat,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogKind::Sys      => "sys",
            LogKind::Money    => "money",
            LogKind::Chat     => "chat",
            LogKind::Love     => "love",
            LogKind::Bad      => "bad",
            LogKind::RelEvent => "rel_event",
            LogKind::Jealous  => "jealous",
        }
    }
}

/// Coarse grouping used by log panels for filtering.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LogCategory {
    Sys,
    Chat,
    Relationship,
}

impl LogCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            LogCategory::Sys          => "sys",
            LogCategory::Chat         => "chat",
            LogCategory::Relationship => "relationship",
        }
    }
}

/// One narrative line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// Timestamp as shown to the player, e.g. `"Day 2 13:40"`.
    pub time:     String,
    /// Resident name, or [`SYSTEM_ACTOR`].
    pub actor:    String,
    pub text:     String,
    pub category: LogCategory,
    pub kind:     LogKind,
}

/// Append-only, capped, most-recent-first log.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries:  VecDeque<LogEntry>,
    /// Total entries ever appended (not capped).  Observers diff this to find
    /// the entries added since they last looked.
    appended: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with `time`.  `actor == None` means system.
    pub fn push(
        &mut self,
        time:  &GameTime,
        actor: Option<&str>,
        text:  impl Into<String>,
        kind:  LogKind,
    ) {
        self.entries.push_front(LogEntry {
            time:     time.stamp(),
            actor:    actor.unwrap_or(SYSTEM_ACTOR).to_owned(),
            text:     text.into(),
            category: kind.category(),
            kind,
        });
        self.entries.truncate(LOG_CAPACITY);
        self.appended += 1;
    }

    /// Shorthand for a system entry.
    pub fn system(&mut self, time: &GameTime, text: impl Into<String>) {
        self.push(time, None, text, LogKind::Sys);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn appended(&self) -> u64 {
        self.appended
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    /// Entries appended after the `mark` returned by an earlier
    /// [`appended`](Self::appended) call, oldest first.  Entries already
    /// evicted by the cap are skipped.
    pub fn since(&self, mark: u64) -> impl Iterator<Item = &LogEntry> {
        let fresh = (self.appended.saturating_sub(mark) as usize).min(self.entries.len());
        self.entries.iter().take(fresh).rev()
    }

    /// Replace the contents with restored entries (newest first).
    pub fn restore(&mut self, entries: Vec<LogEntry>) {
        self.entries = entries.into_iter().take(LOG_CAPACITY).collect();
        self.appended += self.entries.len() as u64;
    }
}
