//! Fluent builder for constructing a [`Sim`].

use town_agent::{Agent, AgentRngs, AgentStore};
use town_behavior::{CannedDialogue, DialogueProvider};
use town_core::{Effects, EventLog, GameTime, SimClock, SimConfig};
use town_mobility::MobilityEngine;
use town_schedule::JobRegistry;
use town_world::{ObjectCatalog, default_town};

use crate::{SaveStore, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, initial population, start speed, map, tuning
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                        |
/// |---------------------|------------------------------------------------|
/// | `.catalog(c)`       | [`default_town`]                               |
/// | `.jobs(j)`          | [`JobRegistry::default_ladders`]               |
/// | `.dialogue(d)`      | [`CannedDialogue`]                             |
/// | `.save_store(s)`    | none; nothing is persisted                     |
/// | `.agents(v)`        | `config.initial_agents` random newcomers       |
/// | `.start_time(t)`    | day 1, 08:00                                   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .save_store(Box::new(MemoryStore::new()))
///     .build()?;
/// sim.run_frames(10_000, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    catalog:  Option<ObjectCatalog>,
    jobs:     Option<JobRegistry>,
    dialogue: Option<Box<dyn DialogueProvider>>,
    save:     Option<Box<dyn SaveStore>>,
    agents:   Option<Vec<Agent>>,
    start:    Option<GameTime>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            catalog:  None,
            jobs:     None,
            dialogue: None,
            save:     None,
            agents:   None,
            start:    None,
        }
    }

    /// Supply the furniture catalog.
    pub fn catalog(mut self, catalog: ObjectCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Supply the job registry.  Capacities are derived from the catalog at
    /// build time.
    pub fn jobs(mut self, jobs: JobRegistry) -> Self {
        self.jobs = Some(jobs);
        self
    }

    pub fn dialogue(mut self, dialogue: Box<dyn DialogueProvider>) -> Self {
        self.dialogue = Some(dialogue);
        self
    }

    /// Attach a save slot.  State is written to it at every day rollover.
    pub fn save_store(mut self, store: Box<dyn SaveStore>) -> Self {
        self.save = Some(store);
        self
    }

    /// Start with exactly these residents instead of random newcomers.
    ///
    /// Their ids must be unique.  No "moved in" lines are logged for them.
    pub fn agents(mut self, agents: Vec<Agent>) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Calendar position to start from.  Its speed is replaced by
    /// `config.start_speed`.
    pub fn start_time(mut self, time: GameTime) -> Self {
        self.start = Some(time);
        self
    }

    /// Validate inputs, derive job capacities, place the population and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let map = self.config.map;
        if map.width <= 2.0 * map.margin || map.height <= 2.0 * map.margin {
            return Err(SimError::Config(format!(
                "map {}x{} leaves no room inside a {} margin",
                map.width, map.height, map.margin
            )));
        }
        if self.config.tuning.top_choices == 0 || self.config.tuning.nearest_choices == 0 {
            return Err(SimError::Config("top_choices and nearest_choices must be at least 1".into()));
        }

        // ── Resolve optional inputs ───────────────────────────────────────
        let catalog = match self.catalog {
            Some(c) => c,
            None => default_town()?,
        };
        let jobs = self.jobs.unwrap_or_else(JobRegistry::default_ladders);
        let capacities = jobs.capacity_table(&catalog);
        let dialogue = self.dialogue.unwrap_or_else(|| Box::new(CannedDialogue));

        let mut time = self.start.unwrap_or_default();
        time.speed = self.config.start_speed;

        let mut sim = Sim {
            mobility: MobilityEngine::new(map, &self.config.tuning),
            rngs: AgentRngs::new(self.config.seed),
            store: AgentStore::new(),
            clock: SimClock::new(time),
            log: EventLog::new(),
            effects: Effects::new(),
            config: self.config,
            catalog,
            jobs,
            capacities,
            dialogue,
            save_store: self.save,
            selected: None,
            halted: None,
        };

        // ── Population ────────────────────────────────────────────────────
        match self.agents {
            Some(agents) => {
                for agent in agents {
                    sim.adopt(agent)?;
                }
            }
            None => sim.populate(sim.config.initial_agents)?,
        }
        Ok(sim)
    }
}
