//! The four entry points `town-sim` calls for each agent.
//!
//! | Hook             | Cadence            | Work done                                      |
//! |------------------|--------------------|------------------------------------------------|
//! | [`update_frame`] | every frame        | needs, timers, decisions, movement, bubble     |
//! | [`on_minute`]    | every game minute  | buff decay, commute cap, shift schedule        |
//! | [`on_hour`]      | every game hour    | money feelings, career satisfaction            |
//! | [`on_day`]       | at day rollover    | daily counters, budget, calendar buffs         |

use tracing::debug;

use town_agent::{Action, Agent, AgentStore, BubbleTone, BuffKind};
use town_core::{AgentId, AgentRng};
use town_mobility::StepOutcome;
use town_schedule::DayKind;

use crate::career::career_satisfaction;
use crate::dynamics::apply_needs;
use crate::{
    BehaviorResult, Narrative, PromotionOutcome, TownContext, apply_intent, check_schedule, decide, finish_action,
    leave_early, start_interaction,
};

/// One frame for agent `me`, `dt` speed units long.
///
/// Order: mood, need dynamics (with early finish or early leave), then
/// either the action timer, a fresh decision, or a movement step, and
/// finally the speech bubble.  A shift has no timer of its own here: only
/// [`check_schedule`] and [`leave_early`] end `Working`.
pub fn update_frame(
    store: &mut AgentStore,
    me:    AgentId,
    rng:   &mut AgentRng,
    dt:    f32,
    ctx:   &TownContext<'_>,
    out:   &mut Narrative<'_>,
) -> BehaviorResult<()> {
    let lover_watching = lover_watching(store, me)?;
    {
        let agent = store.agent_mut(me)?;
        agent.update_mood();
        if apply_needs(agent, dt, lover_watching, rng, ctx)? {
            finish_action(agent, ctx, out)?;
        } else {
            leave_early(agent, ctx, out)?;
        }
    }

    let behavior = store.agent(me)?.behavior;
    if behavior.target.is_some() {
        let outcome = ctx.mobility.step(store.agent_mut(me)?, dt);
        if outcome.reached() {
            start_interaction(store, me, rng, ctx, out)?;
        }
    } else if behavior.action == Action::Working {
        // Frames can outrun the clock above one minute per frame.
    } else if behavior.timer > 0.0 {
        let agent = store.agent_mut(me)?;
        agent.behavior.timer -= dt;
        if agent.behavior.timer <= 0.0 {
            finish_action(agent, ctx, out)?;
        }
    } else {
        let intent = decide(store, me, rng, ctx)?;
        apply_intent(store.agent_mut(me)?, intent, ctx)?;
    }

    store.agent_mut(me)?.bubble.tick();
    Ok(())
}

/// Both `me` and its lover are at the movies.
fn lover_watching(store: &AgentStore, me: AgentId) -> BehaviorResult<bool> {
    let agent = store.agent(me)?;
    if agent.behavior.action != Action::WatchingMovie {
        return Ok(false);
    }
    Ok(agent
        .relationships
        .lover()
        .and_then(|lover| store.get(lover))
        .is_some_and(|lover| lover.behavior.action == Action::WatchingMovie))
}

/// One game minute for agent `me`.
pub fn on_minute(
    store: &mut AgentStore,
    me:    AgentId,
    rng:   &mut AgentRng,
    ctx:   &TownContext<'_>,
    out:   &mut Narrative<'_>,
) -> BehaviorResult<Option<PromotionOutcome>> {
    let agent = store.agent_mut(me)?;
    agent.buffs.tick_minute();
    agent.update_mood();

    if ctx.mobility.commute_minute(agent) == StepOutcome::Teleported {
        debug!(agent = %agent.name, "commute cap reached, placed at work");
        start_interaction(store, me, rng, ctx, out)?;
    }
    check_schedule(store, me, ctx, out)
}

/// One game hour for `agent`.
pub fn on_hour(
    agent: &mut Agent,
    rng:   &mut AgentRng,
    ctx:   &TownContext<'_>,
    out:   &mut Narrative<'_>,
) -> BehaviorResult<()> {
    let money = agent.wallet.money;
    if money < ctx.tuning.broke_threshold && !agent.has_buff(BuffKind::Broke) && !agent.has_buff(BuffKind::Anxious) {
        agent.add_buff(BuffKind::Broke);
        agent.add_buff(BuffKind::Anxious);
        agent.say("I'm broke...", BubbleTone::Bad, ctx.tuning.bubble_frames);
    }
    if money >= ctx.tuning.rich_threshold {
        agent.add_buff(BuffKind::RichFeel);
    }
    career_satisfaction(agent, rng, ctx, out)?;
    Ok(())
}

/// Day rollover for `agent`.  `ctx.time` is already the new day.
pub fn on_day(agent: &mut Agent, ctx: &TownContext<'_>) {
    agent.wallet.reset_daily();
    agent.wallet.recompute_budget(&agent.personality, &agent.buffs);

    let frames = ctx.tuning.bubble_frames;
    match DayKind::of(&ctx.time) {
        DayKind::Holiday(name) => {
            agent.add_buff(BuffKind::HolidayJoy);
            agent.say(format!("Happy {name}!"), BubbleTone::Act, frames);
        }
        DayKind::Weekend => agent.add_buff(BuffKind::WeekendVibes),
        DayKind::Workday => {}
    }
}
