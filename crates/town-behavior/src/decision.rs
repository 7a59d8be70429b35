//! Choosing what an idle agent does next.
//!
//! # Algorithm
//!
//! 1. Any survival need below `critical_threshold` wins outright: the most
//!    depleted one is routed straight to object search.
//! 2. Otherwise every [`Want`] is scored ([`score_wants`]), sorted
//!    descending, and one of the best `top_choices` entries is picked at
//!    random.
//! 3. Scores at or below `action_threshold` become a wander, as does any
//!    search that finds nothing.
//!
//! Deciding only reads the store.  The result is an [`Intent`] that
//! [`apply_intent`] writes onto the agent afterwards.

use town_agent::{Action, Agent, AgentStore, InteractionTarget, LifeGoal, RelAxis, SideHustle};
use town_core::{AgentId, AgentRng, Need, Skill, Vec2, minutes};
use town_mobility::Travel;
use town_world::{Utility, WorldObject};

use crate::{BehaviorResult, Intent, TownContext};

// ── Wants ─────────────────────────────────────────────────────────────────────

/// Something an agent may want to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Want {
    Need(Need),
    Skill(Skill),
    /// Earn money without a job (unemployed only).
    SideHustle,
    Cinema,
    Gym,
    Art,
    Play,
    Gift,
}

impl Want {
    /// Whether an object with `utility` serves this want.
    pub fn served_by(self, utility: &Utility) -> bool {
        match (self, utility) {
            (Want::Need(need), u) => match need {
                Need::Energy  => matches!(u, Utility::Energy),
                Need::Hunger  => matches!(u, Utility::Hunger | Utility::EatOut | Utility::BuyDrink),
                Need::Bladder => matches!(u, Utility::Bladder),
                Need::Hygiene => matches!(u, Utility::Hygiene),
                Need::Fun     => matches!(
                    u,
                    Utility::Fun | Utility::Comfort | Utility::Cinema(_) | Utility::BuyBook
                ),
                Need::Social  => false,
            },
            (Want::Skill(skill), Utility::Skill(s)) => skill == *s,
            (Want::Skill(Skill::Cooking), Utility::Cooking)
            | (Want::Skill(Skill::Gardening), Utility::Gardening)
            | (Want::Skill(Skill::Fishing), Utility::Fishing)
            | (Want::Skill(Skill::Athletics), Utility::GymRun | Utility::GymYoga)
            | (Want::Skill(Skill::Creativity), Utility::Art)
            | (Want::Skill(Skill::Logic), Utility::Computer) => true,
            (Want::Cinema, Utility::Cinema(format)) => format == "imax",
            (Want::Gym, Utility::GymRun)
            | (Want::Art, Utility::Art)
            | (Want::Play, Utility::Play)
            | (Want::Gift, Utility::BuyGift) => true,
            _ => false,
        }
    }
}

/// Score every want, highest first.  Equal scores keep their insertion
/// order (needs, side hustle, skills, then the situational extras).
pub fn score_wants(agent: &Agent) -> Vec<(Want, f32)> {
    let needs = &agent.needs;
    let lack = |need: Need| 100.0 - needs.get(need);
    let fun_lack = lack(Need::Fun);
    let t = agent.personality.temperament;

    let mut social = lack(Need::Social) * 1.5;
    if t.extravert {
        social *= 1.5;
    }
    if agent.mood < 30.0 {
        social = 0.0;
    }

    let mut wants = vec![
        (Want::Need(Need::Energy),  lack(Need::Energy) * 3.0),
        (Want::Need(Need::Hunger),  lack(Need::Hunger) * 2.5),
        (Want::Need(Need::Bladder), lack(Need::Bladder) * 2.8),
        (Want::Need(Need::Hygiene), lack(Need::Hygiene) * 1.5),
        (Want::Need(Need::Fun),     fun_lack * 1.2),
        (Want::Need(Need::Social),  social),
    ];

    if agent.career.is_unemployed() {
        let money = agent.wallet.money;
        let mut desire = if money < 500 {
            200.0
        } else if money < 2000 {
            100.0
        } else if agent.personality.life_goal == LifeGoal::Millionaire {
            80.0
        } else {
            0.0
        };
        for skill in [Skill::Logic, Skill::Fishing, Skill::Creativity] {
            let level = agent.skills.get(skill);
            if level > 10.0 {
                desire += level;
            }
        }
        if desire > 0.0 {
            wants.push((Want::SideHustle, desire));
        }
    }

    for skill in Skill::ALL {
        wants.push((Want::Skill(skill), fun_lack * 0.5 * agent.modifiers.talent(skill)));
    }

    if needs.get(Need::Fun) < 50.0 && agent.wallet.money > 100 {
        wants.push((Want::Cinema, 90.0));
        wants.push((Want::Gym, 60.0));
    }
    if t.intuitive || agent.skills.get(Skill::Creativity) > 20.0 {
        wants.push((Want::Art, fun_lack * 0.9));
    }
    if (t.extravert && !t.judging) || agent.mood < 40.0 {
        wants.push((Want::Play, fun_lack + 10.0));
    }
    if agent.relationships.lover().is_some() && agent.wallet.daily_budget >= 50 {
        wants.push((Want::Gift, 40.0));
    }

    wants.sort_by(|a, b| b.1.total_cmp(&a.1));
    wants
}

/// The most depleted survival need below `threshold`, if any.  Ties go to
/// the earlier entry of `Need::SURVIVAL`.
pub fn critical_need(agent: &Agent, threshold: f32) -> Option<Need> {
    Need::SURVIVAL
        .into_iter()
        .filter(|&n| agent.needs.get(n) < threshold)
        .min_by(|&a, &b| agent.needs.get(a).total_cmp(&agent.needs.get(b)))
}

// ── Decide ────────────────────────────────────────────────────────────────────

/// Decide what idle agent `me` does next.
pub fn decide(
    store: &AgentStore,
    me:    AgentId,
    rng:   &mut AgentRng,
    ctx:   &TownContext<'_>,
) -> BehaviorResult<Intent> {
    let agent = store.agent(me)?;

    if let Some(need) = critical_need(agent, ctx.tuning.critical_threshold) {
        let found = find_object(store, agent, Want::Need(need), rng, ctx);
        return Ok(found.unwrap_or_else(|| wander(rng, ctx)));
    }

    let wants = score_wants(agent);
    let Some(pick) = rng.pick_top(wants.len(), ctx.tuning.top_choices) else {
        return Ok(wander(rng, ctx));
    };
    let (want, score) = wants[pick];
    if score <= ctx.tuning.action_threshold {
        return Ok(wander(rng, ctx));
    }

    let found = match want {
        Want::Need(Need::Social) => find_human(store, agent, rng, ctx),
        Want::SideHustle => find_side_hustle(store, agent, ctx),
        other => find_object(store, agent, other, rng, ctx),
    };
    Ok(found.unwrap_or_else(|| wander(rng, ctx)))
}

/// Usable by `me` as far as reservation and occupancy go.
pub(crate) fn usable_by(store: &AgentStore, me: AgentId, object: &WorldObject) -> bool {
    object.reservation_allows(me) && (object.multi_user || !store.occupied_by_other(object.id, me))
}

/// One of the nearest objects that serve `want` and that `agent` can use
/// and afford.
pub fn find_object(
    store: &AgentStore,
    agent: &Agent,
    want:  Want,
    rng:   &mut AgentRng,
    ctx:   &TownContext<'_>,
) -> Option<Intent> {
    let money = agent.wallet.money;
    let nearest = ctx.catalog.nearest_matching(agent.pos, ctx.tuning.nearest_choices, |o| {
        o.utility.is_interactable()
            && want.served_by(&o.utility)
            && o.affordable(money)
            && usable_by(store, agent.id, o)
    });
    let object = *rng.choose(&nearest)?;
    Some(Intent::UseObject { object, side_hustle: None })
}

fn hustle_utility(hustle: SideHustle) -> Utility {
    match hustle {
        SideHustle::Fishing  => Utility::Fishing,
        SideHustle::Computer => Utility::Computer,
        SideHustle::Garden   => Utility::Gardening,
    }
}

/// Route an unemployed agent to an income activity.
///
/// The computer needs some logic or creativity.  Options are tried in
/// order of the agent's relevant skill; each goes to the nearest free
/// object of its kind.
pub fn find_side_hustle(store: &AgentStore, agent: &Agent, ctx: &TownContext<'_>) -> Option<Intent> {
    let skill = |s: Skill| agent.skills.get(s);
    let coding = skill(Skill::Logic).max(skill(Skill::Creativity));

    let mut options = vec![(SideHustle::Fishing, skill(Skill::Fishing))];
    if skill(Skill::Logic) > 5.0 || skill(Skill::Creativity) > 5.0 {
        options.push((SideHustle::Computer, coding));
    }
    options.push((SideHustle::Garden, skill(Skill::Gardening)));
    options.sort_by(|a, b| b.1.total_cmp(&a.1));

    options.into_iter().find_map(|(hustle, _)| {
        let utility = hustle_utility(hustle);
        ctx.catalog
            .nearest_matching(agent.pos, 1, |o| o.utility == utility && usable_by(store, agent.id, o))
            .first()
            .map(|&object| Intent::UseObject { object, side_hustle: Some(hustle) })
    })
}

/// Someone to talk to: an available agent ranked by friendship plus
/// compatibility, approached to `social_distance` at a random angle.
pub fn find_human(
    store: &AgentStore,
    agent: &Agent,
    rng:   &mut AgentRng,
    ctx:   &TownContext<'_>,
) -> Option<Intent> {
    let mut others: Vec<(&Agent, f32)> = store
        .iter()
        .filter(|o| o.id != agent.id && o.is_available())
        .map(|o| {
            let friendship = agent.relationships.value(o.id, RelAxis::Friendship);
            let compat = agent.personality.compatibility(&o.personality) as f32;
            (o, friendship + compat * 5.0)
        })
        .collect();
    others.sort_by(|a, b| b.1.total_cmp(&a.1));

    let pick = rng.pick_top(others.len(), ctx.tuning.top_choices)?;
    let partner = others[pick].0;
    let point = partner.pos.offset(rng.angle(), ctx.tuning.social_distance);
    Some(Intent::Approach { partner: partner.id, point })
}

/// A random stroll target.  Strolls favour the residential strip.
pub fn wander_point(rng: &mut AgentRng) -> Vec2 {
    let (min_x, max_x): (f32, f32) = if rng.gen_bool(0.6) { (220.0, 300.0) } else { (20.0, 880.0) };
    let x: f32 = rng.gen_range(min_x..max_x);
    let y: f32 = rng.gen_range(50.0..650.0);
    Vec2::new(x, y)
}

fn wander(rng: &mut AgentRng, ctx: &TownContext<'_>) -> Intent {
    Intent::Wander { point: ctx.mobility.bounds.clamp(wander_point(rng)) }
}

// ── Apply ─────────────────────────────────────────────────────────────────────

/// Write a decision onto the agent and start it walking.
pub fn apply_intent(agent: &mut Agent, intent: Intent, ctx: &TownContext<'_>) -> BehaviorResult<()> {
    agent.reset();
    match intent {
        Intent::UseObject { object, side_hustle } => {
            let anchor = ctx.catalog.object(object)?.anchor();
            agent.behavior.interaction = Some(InteractionTarget::Object(object));
            agent.behavior.side_hustle = side_hustle;
            ctx.mobility.head_to(agent, anchor, Travel::Walk)?;
        }
        Intent::Approach { partner, point } => {
            agent.behavior.interaction = Some(InteractionTarget::Agent(partner));
            ctx.mobility.head_to(agent, point, Travel::Walk)?;
        }
        Intent::Wander { point } => {
            ctx.mobility.head_to(agent, point, Travel::Walk)?;
            agent.behavior.action = Action::Wandering;
            agent.behavior.timer = minutes(ctx.tuning.wander_minutes);
        }
    }
    Ok(())
}
