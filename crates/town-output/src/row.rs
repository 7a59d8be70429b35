//! Plain rows written by the output backends.

use town_agent::Agent;
use town_core::{LogEntry, Need};

/// One narrative log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeRow {
    pub time:     String,
    pub actor:    String,
    pub category: &'static str,
    pub kind:     &'static str,
    pub text:     String,
}

impl From<&LogEntry> for NarrativeRow {
    fn from(e: &LogEntry) -> Self {
        Self {
            time:     e.time.clone(),
            actor:    e.actor.clone(),
            category: e.category.as_str(),
            kind:     e.kind.as_str(),
            text:     e.text.clone(),
        }
    }
}

/// One resident at the start of a new day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySnapshotRow {
    pub day:      u32,
    pub agent_id: u32,
    pub name:     String,
    /// Job title.
    pub job:      String,
    pub money:    i64,
    pub mood:     f32,
    /// In [`Need::ALL`] order.
    pub needs:    [f32; Need::COUNT],
}

impl DailySnapshotRow {
    pub fn of(day: u32, agent: &Agent, job: &str) -> Self {
        Self {
            day,
            agent_id: agent.id.0,
            name:     agent.name.clone(),
            job:      job.to_owned(),
            money:    agent.wallet.money,
            mood:     agent.mood,
            needs:    Need::ALL.map(|n| agent.needs.get(n)),
        }
    }
}
