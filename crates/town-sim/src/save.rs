//! Save slot format and the restore rules.
//!
//! # Format
//!
//! One JSON blob, `{ version, time, logs, sims }`, written to a single
//! [`SaveStore`] slot.  Jobs are saved by key, never by index, so that a
//! content update re-resolves them.
//!
//! # Restore rules
//!
//! A resident is rebuilt through [`AgentBuilder`] and the saved fields are
//! laid over the fresh agent.  Then:
//!
//! - an interaction that points at another agent is dropped,
//! - everyone except sleepers is forced idle,
//! - a job key missing from the current registry becomes unemployed with
//!   performance reset,
//! - needs, skills, relationships and timers are clamped into range.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use town_agent::{
    Action, Agent, AgentBuilder, Appearance, Behavior, Buff, Buffs, Career, InteractionTarget, Needs,
    Personality, Relationship, Skills, TraitModifiers, Wallet,
};
use town_core::{AgentId, AgentRng, GameTime, LogEntry, MapBounds, Vec2};
use town_schedule::JobRegistry;
use town_world::ObjectCatalog;

use crate::{SaveError, SaveResult};

/// Current save format.  Blobs with any other version are discarded.
pub const SAVE_VERSION: u32 = 1;

/// Slot name used by key-value backends.
pub const SAVE_KEY: &str = "sandbox_town_save";

// ── Records ───────────────────────────────────────────────────────────────────

/// One saved resident.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id:            AgentId,
    pub name:          String,
    pub age:           u8,
    pub appearance:    Appearance,
    pub personality:   Personality,
    pub needs:         Needs,
    pub skills:        Skills,
    pub buffs:         Vec<Buff>,
    /// Sorted by id.
    pub relationships: Vec<(AgentId, Relationship)>,
    pub wallet:        Wallet,
    /// Job key, e.g. `"developer"`.
    pub job:           String,
    pub performance:   f32,
    #[serde(default)]
    pub left_early:    Option<u32>,
    pub behavior:      Behavior,
    pub pos:           Vec2,
    pub speed:         f32,
}

/// The whole save blob.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    pub version: u32,
    pub time:    GameTime,
    /// Newest first, as in the live log.
    pub logs:    Vec<LogEntry>,
    pub sims:    Vec<AgentRecord>,
}

#[derive(Deserialize)]
struct Header {
    version: u32,
}

impl SaveState {
    pub fn to_json(&self) -> SaveResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a blob, rejecting any version other than [`SAVE_VERSION`]
    /// before looking at the rest.
    pub fn from_json(blob: &str) -> SaveResult<Self> {
        let header: Header = serde_json::from_str(blob)?;
        if header.version != SAVE_VERSION {
            return Err(SaveError::Version { found: header.version, expected: SAVE_VERSION });
        }
        Ok(serde_json::from_str(blob)?)
    }
}

impl AgentRecord {
    pub fn capture(agent: &Agent, jobs: &JobRegistry) -> Self {
        let mut relationships: Vec<(AgentId, Relationship)> =
            agent.relationships.iter().map(|(id, r)| (id, *r)).collect();
        relationships.sort_by_key(|&(id, _)| id);

        Self {
            id:            agent.id,
            name:          agent.name.clone(),
            age:           agent.age,
            appearance:    agent.appearance,
            personality:   agent.personality,
            needs:         agent.needs,
            skills:        agent.skills,
            buffs:         agent.buffs.iter().copied().collect(),
            relationships,
            wallet:        agent.wallet,
            job:           jobs.get(agent.career.job).map(|j| j.key.clone()).unwrap_or_default(),
            performance:   agent.career.performance,
            left_early:    agent.career.left_early,
            behavior:      agent.behavior,
            pos:           agent.pos,
            speed:         agent.speed,
        }
    }

    /// Rebuild a live agent from this record.
    ///
    /// `max_timer` caps a restored sleeper's remaining action time, in timer
    /// units.  Relationships with residents that are no longer in town are
    /// pruned by the caller once everyone is back.
    pub fn revive(
        self,
        rng:       &mut AgentRng,
        bounds:    MapBounds,
        jobs:      &JobRegistry,
        catalog:   &ObjectCatalog,
        max_timer: f32,
    ) -> Agent {
        let p = self.personality;
        let mut agent = AgentBuilder::new(self.id, bounds)
            .name(self.name)
            .at(self.pos)
            .temperament(p.temperament)
            .element(p.element)
            .gender(p.gender)
            .orientation(p.orientation)
            .life_goal(p.life_goal)
            .needs(self.needs)
            .money(self.wallet.money)
            .build(rng);

        let mut personality = p;
        personality.faithfulness = personality.faithfulness.clamp(0.0, 100.0);
        agent.personality = personality;
        agent.modifiers = TraitModifiers::derive(&personality);

        agent.age = self.age;
        agent.appearance = self.appearance;
        if self.speed.is_finite() && self.speed > 0.0 {
            agent.speed = self.speed;
        }
        agent.needs.clamp_all();
        agent.skills = self.skills;
        agent.skills.clamp_all();
        agent.buffs = Buffs::restore(self.buffs);
        for (other, rel) in self.relationships {
            if other != agent.id {
                agent.relationships.restore(other, rel);
            }
        }
        agent.wallet = self.wallet;

        agent.career = match jobs.by_key(&self.job) {
            Some(job) => Career { job, performance: self.performance.max(0.0), left_early: self.left_early },
            None => {
                debug!(agent = %agent.name, job = %self.job, "saved job no longer exists");
                Career::unemployed()
            }
        };

        agent.behavior = settle(self.behavior, catalog, max_timer);
        agent.update_mood();
        agent
    }
}

/// The behaviour a restored agent resumes with.
fn settle(saved: Behavior, catalog: &ObjectCatalog, max_timer: f32) -> Behavior {
    if saved.action != Action::Sleeping {
        return Behavior::default();
    }
    let bed = match saved.interaction {
        Some(InteractionTarget::Object(id)) if catalog.get(id).is_some() => Some(InteractionTarget::Object(id)),
        _ => None,
    };
    let timer = if saved.timer.is_finite() { saved.timer.clamp(0.0, max_timer) } else { 0.0 };
    if bed.is_none() || timer <= 0.0 {
        return Behavior::default();
    }
    Behavior { action: Action::Sleeping, timer, interaction: bed, ..Behavior::default() }
}

// ── Save slot ─────────────────────────────────────────────────────────────────

/// A single-slot blob store.
///
/// Failures are reported, never fatal: the simulation logs them and keeps
/// running.
pub trait SaveStore {
    /// Replace the slot's contents.
    fn write(&mut self, blob: &str) -> SaveResult<()>;

    /// The slot's contents, or `None` when nothing was saved yet.
    fn read(&mut self) -> SaveResult<Option<String>>;
}

/// In-memory slot.  Clones share the same slot, so a test can keep a handle
/// while the simulation owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SaveStore for MemoryStore {
    fn write(&mut self, blob: &str) -> SaveResult<()> {
        *self.slot.borrow_mut() = Some(blob.to_owned());
        Ok(())
    }

    fn read(&mut self) -> SaveResult<Option<String>> {
        Ok(self.slot.borrow().clone())
    }
}
