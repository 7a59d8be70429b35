//! What the behaviour functions see of the rest of the town.

use town_core::{Effects, EventLog, GameTime, JobId, LogKind, Tuning, Vec2};
use town_mobility::MobilityEngine;
use town_schedule::JobRegistry;
use town_world::ObjectCatalog;

use crate::DialogueProvider;

/// Read-only state shared by every agent during one frame.
///
/// Built by `town-sim` each frame from its own fields; nothing here is
/// mutated while agents update.
pub struct TownContext<'a> {
    /// Time snapshot.  Every agent in a frame sees the same value.
    pub time:       GameTime,
    pub catalog:    &'a ObjectCatalog,
    pub jobs:       &'a JobRegistry,
    /// Holder limit per job, indexed by `JobId` (`None` = unlimited).
    pub capacities: &'a [Option<usize>],
    pub tuning:     &'a Tuning,
    pub mobility:   &'a MobilityEngine,
    pub dialogue:   &'a dyn DialogueProvider,
}

impl TownContext<'_> {
    /// Per-frame decay step `f` for a frame of `dt` speed units.
    #[inline]
    pub fn decay_step(&self, dt: f32) -> f32 {
        self.tuning.decay_factor * dt
    }

    /// Per-frame restore step `r` for a frame of `dt` speed units.
    #[inline]
    pub fn restore_step(&self, dt: f32) -> f32 {
        self.tuning.restore_factor * self.decay_step(dt)
    }

    /// Holder limit for `job`; `None` is unlimited.
    #[inline]
    pub fn capacity(&self, job: JobId) -> Option<usize> {
        self.capacities.get(job.index()).copied().flatten()
    }
}

/// Narrative side effects produced while agents update: log lines and
/// heart particles.
pub struct Narrative<'a> {
    pub time:    GameTime,
    pub log:     &'a mut EventLog,
    pub effects: &'a mut Effects,
}

impl<'a> Narrative<'a> {
    pub fn new(time: GameTime, log: &'a mut EventLog, effects: &'a mut Effects) -> Self {
        Self { time, log, effects }
    }

    /// Log a line attributed to a resident.
    pub fn by(&mut self, actor: &str, text: impl Into<String>, kind: LogKind) {
        self.log.push(&self.time, Some(actor), text, kind);
    }

    pub fn system(&mut self, text: impl Into<String>) {
        self.log.system(&self.time, text);
    }

    pub fn heart(&mut self, pos: Vec2) {
        self.effects.spawn_heart(pos);
    }
}
