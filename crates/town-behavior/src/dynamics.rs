//! Per-frame need decay, restoration, and skill practice.
//!
//! Two step sizes drive everything, both proportional to the frame's `dt`:
//!
//! ```text
//! f = decay_factor * dt        (decay, skill practice)
//! r = restore_factor * f       (restoration)
//! ```

use town_agent::{Action, Agent, BubbleTone, BuffKind};
use town_core::{AgentRng, Need, Skill, minutes};
use town_world::{Utility, WorldObject};

use crate::{BehaviorResult, TownContext};

/// Chance per frame that a seated agent picks up their phone.
const PHONE_CHANCE: f64 = 0.005;

/// Apply one frame of need dynamics to `agent`.
///
/// `lover_watching` is whether the agent's lover is also watching a movie
/// (it makes a shared movie social).  Returns `true` when the current
/// action is complete because its need is full; the caller then finishes it.
pub fn apply_needs(
    agent:          &mut Agent,
    dt:             f32,
    lover_watching: bool,
    rng:            &mut AgentRng,
    ctx:            &TownContext<'_>,
) -> BehaviorResult<bool> {
    let f = ctx.decay_step(dt);
    let r = ctx.restore_step(dt);
    let action = agent.behavior.action;

    decay(agent, action, f, ctx);

    let needs = &mut agent.needs;
    let done = match action {
        Action::Working => {
            let floor = ctx.tuning.work_refill_floor;
            for need in [Need::Hunger, Need::Bladder, Need::Hygiene, Need::Social] {
                if needs.get(need) < floor {
                    needs.add(need, 2.0 * r);
                }
            }
            false
        }
        Action::Sleeping => {
            let mut rate = 100.0 / minutes(ctx.tuning.restore_minutes.energy) * dt;
            if agent.buffs.has(BuffKind::WellRested) {
                rate *= 1.2;
            }
            needs.add(Need::Energy, rate);
            needs.get(Need::Energy) >= 100.0
        }
        Action::Eating => {
            needs.add(Need::Hunger, 5.0 * r);
            false
        }
        Action::Talking => {
            needs.add(Need::Social, r);
            false
        }
        Action::WatchingMovie => {
            needs.add(Need::Fun, 3.0 * r);
            needs.add(Need::Energy, -0.1 * r);
            if lover_watching {
                needs.add(Need::Social, 2.0 * r);
            }
            false
        }
        Action::Phone => {
            needs.add(Need::Fun, 0.8 * r);
            needs.add(Need::Social, 0.1 * r);
            false
        }
        Action::Using => match agent.behavior.interacting_with_object() {
            Some(id) => use_object(agent, ctx.catalog.object(id)?, f, r, rng, ctx),
            None => false,
        },
        _ => false,
    };
    Ok(done)
}

fn decay(agent: &mut Agent, action: Action, f: f32, ctx: &TownContext<'_>) {
    let working = action == Action::Working;
    for need in Need::ALL {
        let exempt = match need {
            Need::Energy => action == Action::Sleeping,
            Need::Hunger => action == Action::Eating,
            Need::Fun => action == Action::WatchingMovie,
            Need::Social => matches!(action, Action::Talking | Action::WatchingMovie),
            Need::Bladder | Need::Hygiene => false,
        };
        if exempt {
            continue;
        }
        let mut rate = ctx.tuning.base_decay.get(need) * agent.modifiers.metabolism(need) * f;
        if working && need != Need::Energy {
            rate *= 0.5;
        }
        agent.needs.add(need, -rate);
    }
}

/// Practise `skill` by `base * f`, scaled by talent.
fn practise(agent: &mut Agent, skill: Skill, base: f32, f: f32) {
    let talent = agent.modifiers.talent(skill);
    agent.skills.gain(skill, base * f * talent);
}

fn use_object(
    agent:  &mut Agent,
    object: &WorldObject,
    f:      f32,
    r:      f32,
    rng:    &mut AgentRng,
    ctx:    &TownContext<'_>,
) -> bool {
    let mut done = false;
    match &object.utility {
        Utility::GymRun | Utility::GymYoga => {
            practise(agent, Skill::Athletics, 0.08, f);
            agent.needs.add(Need::Energy, -2.0 * r);
            agent.needs.add(Need::Hygiene, -0.5 * r);
        }
        Utility::Gardening => {
            practise(agent, Skill::Gardening, 0.05, f);
            agent.needs.add(Need::Fun, r);
            agent.needs.add(Need::Energy, -r);
        }
        Utility::Fishing => {
            practise(agent, Skill::Fishing, 0.05, f);
            agent.needs.add(Need::Fun, 0.8 * r);
        }
        Utility::Cooking => practise(agent, Skill::Cooking, 0.05, f),
        Utility::Skill(skill) => {
            let mut gain = 0.05 * f * agent.modifiers.talent(*skill);
            if agent.mood > 90.0 {
                gain *= 1.2;
            }
            agent.skills.gain(*skill, gain);
            agent.needs.add(Need::Fun, 0.5 * r);
            agent.needs.add(Need::Energy, -0.2 * r);
        }
        Utility::Computer => {
            agent.needs.add(Need::Fun, r);
            practise(agent, Skill::Logic, 0.03, f);
        }
        Utility::Art => {
            agent.needs.add(Need::Fun, r);
            practise(agent, Skill::Creativity, 0.03, f);
        }
        Utility::Play => agent.needs.add(Need::Fun, 1.5 * r),
        Utility::Bladder | Utility::Hygiene => {
            if let Some(need) = object.utility.restores() {
                agent.needs.add(need, 6.0 * r);
                done = agent.needs.get(need) >= 100.0;
            }
        }
        other => {
            if let Some(need) = other.restores() {
                agent.needs.add(need, r);
            }
        }
    }

    if object.is_seat() {
        agent.needs.add(Need::Energy, 0.5 * r);
        if agent.behavior.timer > minutes(30.0) && rng.gen_bool(PHONE_CHANCE) {
            agent.say("*checks phone*", BubbleTone::Normal, ctx.tuning.bubble_frames);
            agent.behavior.action = Action::Phone;
        }
    }
    done
}
