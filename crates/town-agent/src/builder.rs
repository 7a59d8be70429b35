//! Fluent builder for residents.
//!
//! # Usage
//!
//! ```rust
//! use town_agent::{AgentBuilder, Gender};
//! use town_core::{AgentId, AgentRng, MapBounds};
//!
//! let mut rng = AgentRng::new(42, AgentId(0));
//! let agent = AgentBuilder::new(AgentId(0), MapBounds::default())
//!     .name("Ada Moss")
//!     .gender(Gender::Female)
//!     .money(1_000)
//!     .build(&mut rng);
//!
//! assert_eq!(agent.wallet.money, 1_000);
//! assert!(agent.skills.iter().all(|(_, v)| v == 0.0));
//! ```
//!
//! Everything not overridden is randomised from the agent's own RNG.

use town_core::{AgentId, AgentRng, JobId, MapBounds, Need, Vec2};
use town_schedule::JobRegistry;

use crate::{
    Agent, Appearance, Behavior, Bubble, Buffs, Career, Element, Gender, LifeGoal, Needs,
    Orientation, Personality, Relationships, Skills, Temperament, TraitModifiers, Wallet,
};

const GIVEN_NAMES: &[&str] = &[
    "Ada", "Ben", "Cleo", "Dev", "Eli", "Fay", "Gus", "Hana", "Ivo", "June", "Kai", "Lena",
    "Milo", "Nora", "Otto", "Pia", "Quinn", "Rosa", "Sol", "Tess", "Uma", "Vik", "Wren", "Zoe",
];

const SURNAMES: &[&str] = &[
    "Abbot", "Brook", "Carver", "Dale", "Ember", "Finch", "Grove", "Hale", "Ives", "Jarvis",
    "Kerr", "Lark", "Moss", "North", "Oakes", "Pike", "Reed", "Stone", "Thorn", "Vale",
];

/// Number of cosmetic variants per appearance slot.
const PALETTE: u8 = 6;

/// Builds one [`Agent`].  Unset fields are drawn from the RNG passed to
/// [`build`](Self::build).
pub struct AgentBuilder {
    id:          AgentId,
    bounds:      MapBounds,
    name:        Option<String>,
    pos:         Option<Vec2>,
    job:         Option<JobId>,
    temperament: Option<Temperament>,
    element:     Option<Element>,
    gender:      Option<Gender>,
    orientation: Option<Orientation>,
    life_goal:   Option<LifeGoal>,
    needs:       Option<Needs>,
    money:       Option<i64>,
}

impl AgentBuilder {
    pub fn new(id: AgentId, bounds: MapBounds) -> Self {
        Self {
            id,
            bounds,
            name:        None,
            pos:         None,
            job:         None,
            temperament: None,
            element:     None,
            gender:      None,
            orientation: None,
            life_goal:   None,
            needs:       None,
            money:       None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Spawn position (clamped to the map).
    pub fn at(mut self, pos: Vec2) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn job(mut self, job: JobId) -> Self {
        self.job = Some(job);
        self
    }

    pub fn temperament(mut self, t: Temperament) -> Self {
        self.temperament = Some(t);
        self
    }

    pub fn element(mut self, e: Element) -> Self {
        self.element = Some(e);
        self
    }

    pub fn gender(mut self, g: Gender) -> Self {
        self.gender = Some(g);
        self
    }

    pub fn orientation(mut self, o: Orientation) -> Self {
        self.orientation = Some(o);
        self
    }

    pub fn life_goal(mut self, goal: LifeGoal) -> Self {
        self.life_goal = Some(goal);
        self
    }

    pub fn needs(mut self, needs: Needs) -> Self {
        self.needs = Some(needs);
        self
    }

    pub fn money(mut self, money: i64) -> Self {
        self.money = Some(money);
        self
    }

    /// Construct the agent.  The RNG is consumed in a fixed order so the
    /// same seed and overrides always give the same resident.
    pub fn build(self, rng: &mut AgentRng) -> Agent {
        let given = rng.choose(GIVEN_NAMES).copied().unwrap_or("Sam");
        let surname = rng.choose(SURNAMES).copied().unwrap_or("Doe");
        let name = self.name.unwrap_or_else(|| format!("{given} {surname}"));

        let rolled_gender = if rng.gen_bool(0.5) { Gender::Male } else { Gender::Female };
        let gender = self.gender.unwrap_or(rolled_gender);

        let rolled_temperament = Temperament {
            extravert: rng.gen_bool(0.5),
            intuitive: rng.gen_bool(0.5),
            feeling:   rng.gen_bool(0.5),
            judging:   rng.gen_bool(0.5),
        };
        let temperament = self.temperament.unwrap_or(rolled_temperament);

        let rolled_element = Element::ALL[rng.gen_range(0..Element::ALL.len())];
        let element = self.element.unwrap_or(rolled_element);

        let roll: f64 = rng.random();
        let rolled_orientation = if roll < 0.7 {
            Orientation::Hetero
        } else if roll < 0.85 {
            Orientation::Homo
        } else {
            Orientation::Bi
        };
        let orientation = self.orientation.unwrap_or(rolled_orientation);

        let base_faith = if temperament.judging { 70.0 } else { 40.0 };
        let faithfulness = (base_faith + rng.gen_range(-20.0f32..=20.0)).clamp(0.0, 100.0);

        let rolled_goal = LifeGoal::ALL[rng.gen_range(0..LifeGoal::ALL.len())];
        let life_goal = self.life_goal.unwrap_or(rolled_goal);

        let personality = Personality { temperament, element, gender, orientation, faithfulness, life_goal };

        let mut rolled_needs = Needs::default();
        for need in Need::ALL {
            rolled_needs.set(need, f32::from(rng.gen_range(60u8..100)));
        }
        let needs = self.needs.unwrap_or(rolled_needs);

        let rolled_money = rng.gen_range(2000..5000);
        let money = self.money.unwrap_or(rolled_money);

        let age = rng.gen_range(20..30);
        let appearance = Appearance {
            skin:    rng.gen_range(0..PALETTE),
            hair:    rng.gen_range(0..PALETTE),
            clothes: rng.gen_range(0..PALETTE),
        };
        let speed = (4.0 + rng.gen_range(0.0f32..1.5)) * 1.5;

        let b = self.bounds;
        let rolled_pos = Vec2::new(
            rng.gen_range(b.margin..b.width - b.margin),
            rng.gen_range(b.margin..b.height - b.margin),
        );
        let pos = b.clamp(self.pos.unwrap_or(rolled_pos));

        let mut agent = Agent {
            id: self.id,
            name,
            age,
            appearance,
            personality,
            modifiers: TraitModifiers::derive(&personality),
            needs,
            skills: Skills::default(),
            mood: 0.0,
            buffs: Buffs::default(),
            relationships: Relationships::default(),
            wallet: Wallet::new(money),
            career: self.job.map_or_else(Career::unemployed, Career::with_job),
            behavior: Behavior::default(),
            pos,
            speed,
            bubble: Bubble::default(),
        };
        agent.update_mood();
        agent
    }
}

// ── Initial job ───────────────────────────────────────────────────────────────

/// Choose a starting job for a newcomer.
///
/// Candidates are every job whose holder count is below its capacity;
/// unemployed (unlimited) is always a candidate.  A would-be millionaire
/// first gets a coin flip for a developer seat if one is free.
///
/// `capacities` and `holders` are indexed by `JobId` (see
/// [`JobRegistry::capacity_table`] and
/// [`AgentStore::holder_counts`](crate::AgentStore::holder_counts)).
pub fn pick_initial_job(
    rng:        &mut AgentRng,
    goal:       LifeGoal,
    registry:   &JobRegistry,
    capacities: &[Option<usize>],
    holders:    &[usize],
) -> JobId {
    let has_room = |id: JobId| {
        let held = holders.get(id.index()).copied().unwrap_or(0);
        match capacities.get(id.index()).copied().flatten() {
            Some(cap) => held < cap,
            None => true,
        }
    };

    if goal == LifeGoal::Millionaire {
        if let Some(dev) = registry.by_key("developer").filter(|&id| has_room(id)) {
            if rng.gen_bool(0.5) {
                return dev;
            }
        }
    }

    let open: Vec<JobId> = registry.iter().map(|j| j.id).filter(|&id| has_room(id)).collect();
    rng.choose(&open).copied().unwrap_or_else(|| registry.unemployed())
}
