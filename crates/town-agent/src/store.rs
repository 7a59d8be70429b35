//! Resident storage: `AgentStore` (the agents) and `AgentRngs` (their RNGs).
//!
//! # Why two structs?
//!
//! A decision needs `&mut AgentRng` for the deciding agent and `&AgentStore`
//! to look at everyone else (occupancy, partners) at the same time.  The
//! borrow checker forbids this if the RNG lives inside `Agent`, so RNGs sit
//! in a parallel list with the same positions:
//!
//! ```ignore
//! // town-sim frame loop (simplified):
//! for pos in 0..sim.store.len() {
//!     let rng = sim.rngs.get_mut(pos);
//!     let intent = decide(&sim.store, pos, rng, &ctx);
//!     apply(&mut sim.store, pos, intent);
//! }
//! ```

use rustc_hash::FxHashMap;
use town_core::{AgentId, AgentRng, JobId, ObjectId};

use crate::{Agent, AgentError, AgentResult};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNGs, kept at the same positions as the agents in
/// [`AgentStore`].
pub struct AgentRngs {
    seed:  u64,
    inner: Vec<AgentRng>,
}

impl AgentRngs {
    pub fn new(seed: u64) -> Self {
        Self { seed, inner: Vec::new() }
    }

    /// One RNG per agent currently in `store`, in store order.
    pub fn for_store(store: &AgentStore, seed: u64) -> Self {
        let inner = store.iter().map(|a| AgentRng::new(seed, a.id)).collect();
        Self { seed, inner }
    }

    /// Append the RNG for a newly inserted agent.
    pub fn push(&mut self, agent: AgentId) {
        self.inner.push(AgentRng::new(self.seed, agent));
    }

    /// Mutable RNG at store position `pos`.
    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut AgentRng> {
        self.inner.get_mut(pos)
    }

    /// Drop the RNG at `pos`; mirrors [`AgentStore::remove`].
    pub fn remove(&mut self, pos: usize) {
        if pos < self.inner.len() {
            self.inner.remove(pos);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// All residents in update order, plus an id → position index.
///
/// Ids are never reused: removing an agent does not free its id.
#[derive(Debug, Default)]
pub struct AgentStore {
    agents:  Vec<Agent>,
    index:   FxHashMap<AgentId, usize>,
    next_id: u32,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next unused id.
    pub fn allocate_id(&mut self) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append `agent`; returns its store position.
    pub fn insert(&mut self, agent: Agent) -> AgentResult<usize> {
        if self.index.contains_key(&agent.id) {
            return Err(AgentError::DuplicateAgent(agent.id));
        }
        let pos = self.agents.len();
        self.next_id = self.next_id.max(agent.id.0.saturating_add(1));
        self.index.insert(agent.id, pos);
        self.agents.push(agent);
        Ok(pos)
    }

    /// Remove `id`.  Everyone else forgets them and drops any interaction
    /// pointing at them.  Returns the removed agent and its old position.
    pub fn remove(&mut self, id: AgentId) -> AgentResult<(usize, Agent)> {
        let pos = self.position(id)?;
        let agent = self.agents.remove(pos);
        self.reindex();
        for other in &mut self.agents {
            other.relationships.forget(id);
            if other.behavior.interacting_with_agent() == Some(id) {
                other.reset();
            }
        }
        Ok((pos, agent))
    }

    /// Drop every agent.  Id allocation continues where it was.
    pub fn clear(&mut self) {
        self.agents.clear();
        self.index.clear();
    }

    fn reindex(&mut self) {
        self.index = self.agents.iter().enumerate().map(|(i, a)| (a.id, i)).collect();
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn position(&self, id: AgentId) -> AgentResult<usize> {
        self.index.get(&id).copied().ok_or(AgentError::UnknownAgent(id))
    }

    #[inline]
    pub fn contains(&self, id: AgentId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.index.get(&id).map(|&i| &self.agents[i])
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.index.get(&id).map(|&i| &mut self.agents[i])
    }

    /// Like [`get`](Self::get) but a missing id is an error.
    pub fn agent(&self, id: AgentId) -> AgentResult<&Agent> {
        self.get(id).ok_or(AgentError::UnknownAgent(id))
    }

    pub fn agent_mut(&mut self, id: AgentId) -> AgentResult<&mut Agent> {
        self.get_mut(id).ok_or(AgentError::UnknownAgent(id))
    }

    /// Agent at store position `pos`.
    #[inline]
    pub fn at(&self, pos: usize) -> Option<&Agent> {
        self.agents.get(pos)
    }

    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> Option<&mut Agent> {
        self.agents.get_mut(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(|a| a.id)
    }

    /// Two distinct agents mutably at once, in argument order.  `None` if
    /// either is missing or `a == b`.
    pub fn pair_mut(&mut self, a: AgentId, b: AgentId) -> Option<(&mut Agent, &mut Agent)> {
        let ia = *self.index.get(&a)?;
        let ib = *self.index.get(&b)?;
        if ia == ib {
            return None;
        }
        if ia < ib {
            let (lo, hi) = self.agents.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else {
            let (lo, hi) = self.agents.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        }
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// Some agent other than `except` is currently interacting with `object`.
    pub fn occupied_by_other(&self, object: ObjectId, except: AgentId) -> bool {
        self.agents
            .iter()
            .any(|a| a.id != except && a.behavior.interacting_with_object() == Some(object))
    }

    /// Agents whose interaction target is `object`.
    pub fn users_of(&self, object: ObjectId) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(move |a| a.behavior.interacting_with_object() == Some(object))
    }

    // ── Jobs ──────────────────────────────────────────────────────────────

    /// Agents currently holding `job`.
    pub fn holders(&self, job: JobId) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(move |a| a.career.job == job)
    }

    /// Holder count per job, indexed by `JobId`, for a registry of
    /// `job_count` entries.  Agents on ids outside the registry are skipped.
    pub fn holder_counts(&self, job_count: usize) -> Vec<usize> {
        let mut counts = vec![0; job_count];
        for a in &self.agents {
            if let Some(c) = counts.get_mut(a.career.job.index()) {
                *c += 1;
            }
        }
        counts
    }
}
