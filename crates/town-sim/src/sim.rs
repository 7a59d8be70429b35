//! The `Sim` struct and its frame loop.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error, info, warn};

use town_agent::{Agent, AgentBuilder, AgentRngs, AgentStore, Career, pick_initial_job};
use town_behavior::{DialogueProvider, Narrative, TownContext, on_day, on_hour, on_minute, update_frame};
use town_core::{
    AgentId, AgentRng, ClockEvents, Effects, EventLog, GameTime, Particle, SimClock, SimConfig, minutes,
};
use town_mobility::MobilityEngine;
use town_schedule::JobRegistry;
use town_world::ObjectCatalog;

use crate::{AgentRecord, AgentView, SAVE_VERSION, SaveState, SaveStore, SimError, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner: every resident, the clock, the narrative
/// log and the static town content, owned in one place.
///
/// One call to [`frame`](Self::frame) is one animation frame:
///
/// 1. **Clock**: add `speed` units; at most one simulated minute elapses.
/// 2. **Minute hooks** (on a minute boundary): buff decay, commute cap,
///    shift schedule, for every agent in store order.
/// 3. **Hour hooks** (on an hour boundary): money feelings, career
///    satisfaction.
/// 4. **Day rollover**: daily counters, budgets, calendar buffs, a system
///    log line, then persistence.
/// 5. **Agent updates**: `update_frame` for every agent in store order, all
///    seeing the same time snapshot.
///
/// Any error or panic in steps 1 to 5 stops the clock (speed 0) and is
/// reported through [`SimObserver::on_halt`] and the narrative log.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config:     SimConfig,
    pub clock:      SimClock,
    /// Residents in update order.
    pub store:      AgentStore,
    /// Per-agent RNGs, same positions as `store`.
    pub rngs:       AgentRngs,
    pub catalog:    ObjectCatalog,
    pub jobs:       JobRegistry,
    /// Holder limit per job, indexed by `JobId`, derived from `catalog`.
    pub capacities: Vec<Option<usize>>,
    pub mobility:   MobilityEngine,
    pub log:        EventLog,
    pub effects:    Effects,

    pub(crate) dialogue:   Box<dyn DialogueProvider>,
    pub(crate) save_store: Option<Box<dyn SaveStore>>,
    pub(crate) selected:   Option<AgentId>,
    pub(crate) halted:     Option<String>,
}

impl Sim {
    // ── Frame loop ────────────────────────────────────────────────────────

    /// Advance one animation frame.  Returns the clock boundaries crossed.
    ///
    /// Particles age even while paused; nothing else happens then.
    pub fn frame<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<ClockEvents> {
        self.effects.tick();
        if self.clock.is_paused() {
            return Ok(ClockEvents::default());
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.step(observer)));
        let reason = match outcome {
            Ok(Ok(events)) => return Ok(events),
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };
        Err(self.halt(reason, observer))
    }

    /// Run `n` frames, stopping at the first failure.  `on_sim_end` is
    /// called either way.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        let mut result = Ok(());
        for _ in 0..n {
            if let Err(e) = self.frame(observer) {
                result = Err(e);
                break;
            }
        }
        observer.on_sim_end(&self.clock.time);
        result
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<ClockEvents> {
        if self.rngs.len() != self.store.len() {
            return Err(SimError::AgentCountMismatch {
                expected: self.store.len(),
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }

        let events = self.clock.advance();
        let time = self.clock.time;
        let dt = time.speed as f32;
        let ids: Vec<AgentId> = self.store.ids().collect();

        {
            // Explicit field borrows so the borrow checker sees disjoint access.
            let ctx = TownContext {
                time,
                catalog:    &self.catalog,
                jobs:       &self.jobs,
                capacities: &self.capacities,
                tuning:     &self.config.tuning,
                mobility:   &self.mobility,
                dialogue:   &*self.dialogue,
            };
            let mut out = Narrative::new(time, &mut self.log, &mut self.effects);
            let store = &mut self.store;
            let rngs = &mut self.rngs;

            if events.minute {
                for (pos, &id) in ids.iter().enumerate() {
                    on_minute(store, id, rng_at(rngs, pos)?, &ctx, &mut out)?;
                }
            }
            if events.hour {
                for (pos, agent) in store.iter_mut().enumerate() {
                    on_hour(agent, rng_at(rngs, pos)?, &ctx, &mut out)?;
                }
            }
            if events.day {
                for agent in store.iter_mut() {
                    on_day(agent, &ctx);
                }
                out.system("A new day has begun.");
            }

            for (pos, &id) in ids.iter().enumerate() {
                update_frame(store, id, rng_at(rngs, pos)?, dt, &ctx, &mut out)?;
            }
        }

        if events.minute {
            observer.on_minute(&time);
        }
        if events.hour {
            observer.on_hour(&time);
        }
        if events.day {
            info!(day = time.day, month = time.month, date = time.date, residents = self.store.len(), "new day");
            observer.on_day(&time, &self.store, &self.jobs);
            self.persist();
        }
        observer.on_frame_end(&time, &self.log);
        Ok(events)
    }

    /// Stop the clock after a failed frame.
    fn halt<O: SimObserver>(&mut self, reason: String, observer: &mut O) -> SimError {
        self.clock.set_speed(0);
        error!(time = %self.clock.time, reason = %reason, "frame failed, clock stopped");
        self.log.system(&self.clock.time, format!("Simulation stopped: {reason}"));
        observer.on_halt(&self.clock.time, &reason);
        self.halted = Some(reason.clone());
        SimError::Halted(reason)
    }

    // ── Clock control ─────────────────────────────────────────────────────

    /// Change the speed multiplier.  A non-zero speed also clears a halt.
    pub fn set_speed(&mut self, speed: u32) {
        self.clock.set_speed(speed);
        if speed > 0 {
            self.halted = None;
        }
    }

    /// Why the clock was stopped, if a frame failed.
    pub fn halt_reason(&self) -> Option<&str> {
        self.halted.as_deref()
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    // ── Render boundary ───────────────────────────────────────────────────

    #[inline]
    pub fn time(&self) -> &GameTime {
        &self.clock.time
    }

    #[inline]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.effects.particles()
    }

    pub fn agent_views(&self) -> Vec<AgentView> {
        self.store.iter().map(|a| AgentView::of(a, self.selected)).collect()
    }

    #[inline]
    pub fn selected(&self) -> Option<AgentId> {
        self.selected
    }

    /// UI command: select a resident.
    pub fn select_agent(&mut self, id: AgentId) -> SimResult<()> {
        self.store.agent(id)?;
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// UI command: a random newcomer moves in.
    pub fn spawn_agent(&mut self) -> SimResult<AgentId> {
        let pos = self.store.len();
        if self.rngs.len() != pos {
            return Err(SimError::AgentCountMismatch { expected: pos, got: self.rngs.len(), what: "agent RNGs" });
        }

        let id = self.store.allocate_id();
        self.rngs.push(id);
        let rng = self
            .rngs
            .get_mut(pos)
            .ok_or(SimError::AgentCountMismatch { expected: pos + 1, got: pos, what: "agent RNGs" })?;

        let mut agent = AgentBuilder::new(id, self.config.map).build(rng);
        let holders = self.store.holder_counts(self.jobs.len());
        let job = pick_initial_job(rng, agent.personality.life_goal, &self.jobs, &self.capacities, &holders);
        agent.career = Career::with_job(job);
        agent.wallet.recompute_budget(&agent.personality, &agent.buffs);

        let name = agent.name.clone();
        if let Err(e) = self.store.insert(agent) {
            self.rngs.remove(pos);
            return Err(e.into());
        }
        self.log.system(&self.clock.time, format!("{name} moved into town."));
        debug!(agent = %name, %id, job = ?job, "spawned");
        Ok(id)
    }

    /// Insert a prepared agent with a fresh RNG.
    pub(crate) fn adopt(&mut self, agent: Agent) -> SimResult<()> {
        let id = agent.id;
        self.store.insert(agent)?;
        self.rngs.push(id);
        Ok(())
    }

    /// Spawn `n` random newcomers.
    pub(crate) fn populate(&mut self, n: usize) -> SimResult<()> {
        for _ in 0..n {
            self.spawn_agent()?;
        }
        Ok(())
    }

    // ── Persistence ───────────────────────────────────────────────────────

    /// Snapshot of everything the save slot holds.
    pub fn save_state(&self) -> SaveState {
        SaveState {
            version: SAVE_VERSION,
            time:    self.clock.time,
            logs:    self.log.iter().cloned().collect(),
            sims:    self.store.iter().map(|a| AgentRecord::capture(a, &self.jobs)).collect(),
        }
    }

    /// Write the current state to the save slot.  Returns whether it was
    /// written.  A failure is logged and the simulation carries on.
    pub fn persist(&mut self) -> bool {
        if self.save_store.is_none() {
            return false;
        }
        let blob = self.save_state().to_json();
        let Some(slot) = self.save_store.as_mut() else {
            return false;
        };
        match blob.and_then(|b| slot.write(&b)) {
            Ok(()) => {
                debug!(day = self.clock.time.day, "state saved");
                true
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                self.log.system(&self.clock.time, format!("Save failed: {e}"));
                false
            }
        }
    }

    /// Restore from the attached save slot.  Returns whether a save was
    /// applied; an empty or unreadable slot leaves the town as it is.
    pub fn load(&mut self) -> SimResult<bool> {
        let Some(slot) = self.save_store.as_mut() else {
            return Ok(false);
        };
        match slot.read() {
            Ok(Some(blob)) => self.restore_blob(&blob),
            Ok(None) => Ok(false),
            Err(e) => {
                warn!(error = %e, "could not read save");
                self.log.system(&self.clock.time, format!("Could not read save: {e}"));
                Ok(false)
            }
        }
    }

    /// Restore from a JSON blob.  A blob of another version, or one that
    /// does not parse, is discarded and a fresh population moves in.
    pub fn restore_blob(&mut self, blob: &str) -> SimResult<bool> {
        match SaveState::from_json(blob) {
            Ok(state) => {
                self.restore(state)?;
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "discarding incompatible save");
                self.reset_population()?;
                self.log.system(&self.clock.time, "Save data was incompatible; a fresh town was started.");
                Ok(false)
            }
        }
    }

    /// Replace the whole town with `state`.
    pub fn restore(&mut self, state: SaveState) -> SimResult<()> {
        self.clear_population();
        self.effects = Effects::new();
        self.halted = None;
        self.clock = SimClock::new(state.time);
        self.log = EventLog::new();
        self.log.restore(state.logs);

        let max_timer = minutes(self.config.tuning.restore_minutes.energy);
        for record in state.sims {
            if self.store.contains(record.id) {
                warn!(id = %record.id, "duplicate resident in save, skipped");
                continue;
            }
            let mut rng = AgentRng::new(self.config.seed, record.id);
            let agent = record.revive(&mut rng, self.config.map, &self.jobs, &self.catalog, max_timer);
            self.adopt(agent)?;
        }

        let present: Vec<AgentId> = self.store.ids().collect();
        for agent in self.store.iter_mut() {
            let gone: Vec<AgentId> =
                agent.relationships.iter().map(|(id, _)| id).filter(|id| !present.contains(id)).collect();
            for id in gone {
                agent.relationships.forget(id);
            }
        }
        info!(residents = self.store.len(), time = %self.clock.time, "save restored");
        Ok(())
    }

    /// Everyone moves out and `config.initial_agents` newcomers move in.
    pub fn reset_population(&mut self) -> SimResult<()> {
        self.clear_population();
        self.populate(self.config.initial_agents)
    }

    fn clear_population(&mut self) {
        self.store.clear();
        self.rngs = AgentRngs::new(self.config.seed);
        self.selected = None;
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rng_at(rngs: &mut AgentRngs, pos: usize) -> SimResult<&mut AgentRng> {
    let got = rngs.len();
    rngs.get_mut(pos).ok_or(SimError::AgentCountMismatch { expected: pos + 1, got, what: "agent RNGs" })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panic: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panic: {s}")
    } else {
        "panic".to_owned()
    }
}
