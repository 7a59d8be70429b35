//! Work shifts, pay, promotion contests and resignation.
//!
//! # Shift state machine (checked every simulated minute)
//!
//! ```text
//! not working today            → nothing
//! on shift, not on the job     → commute to a free desk (or stand)
//! off shift, still on the job  → clock out: salary, performance, maybe promotion
//! ```
//!
//! # Promotion
//!
//! Once performance passes `promotion_threshold` the agent tries for the
//! next rung of its company ladder.  A rung with a free slot is taken
//! outright.  A full rung starts a contest against the incumbent with the
//! lowest performance:
//!
//! ```text
//! score = performance × w.performance + mood × w.mood + key_skill × w.skill
//! ```
//!
//! The winner holds the higher rung and the loser the lower one, so holder
//! counts never change during a contest and never exceed capacity.

use tracing::{debug, info};

use town_agent::{Action, Agent, AgentError, AgentStore, BubbleTone, BuffKind, Career, InteractionTarget, VirtualTarget};
use town_core::{AgentId, AgentRng, JobId, LogKind, Need};
use town_mobility::Travel;
use town_schedule::CompanyType;

use crate::decision::usable_by;
use crate::{BehaviorResult, Narrative, TownContext};

/// What a promotion attempt came to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PromotionOutcome {
    /// A free slot on the next rung.
    Promoted(JobId),
    /// Beat the weakest incumbent, who takes the challenger's old job.
    WonContest { job: JobId, demoted: AgentId },
    /// Lost to the incumbent.
    LostContest { incumbent: AgentId },
    /// No higher rung exists.
    NoOpening,
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// Per-minute shift check for `me`.
pub fn check_schedule(
    store: &mut AgentStore,
    me:    AgentId,
    ctx:   &TownContext<'_>,
    out:   &mut Narrative<'_>,
) -> BehaviorResult<Option<PromotionOutcome>> {
    let agent = store.agent(me)?;
    let job = ctx.jobs.job(agent.career.job)?;
    if !job.works_today(&ctx.time) {
        return Ok(None);
    }

    let on_the_job = agent.behavior.action.is_on_the_job();
    if job.on_shift(&ctx.time) {
        if !on_the_job && !agent.career.skipped_today(ctx.time.day) {
            go_to_work(store, me, ctx)?;
        }
        Ok(None)
    } else if on_the_job {
        clock_out(store, me, ctx, out).map(Some)
    } else {
        Ok(None)
    }
}

/// Drop everything and commute to a free workstation matching the job's
/// desk keyword, or to the standing spot if every desk is taken.
fn go_to_work(store: &mut AgentStore, me: AgentId, ctx: &TownContext<'_>) -> BehaviorResult<()> {
    let job = ctx.jobs.job(store.agent(me)?.career.job)?;
    let desk = job.desk_keyword().and_then(|keyword| {
        ctx.catalog
            .work_objects(keyword)
            .find(|o| usable_by(store, me, o))
            .map(|o| (InteractionTarget::Object(o.id), o.anchor()))
    });
    let (target, point) =
        desk.unwrap_or((InteractionTarget::Virtual(VirtualTarget::StandingWork), ctx.tuning.standing_work_spot));

    let agent = store.agent_mut(me)?;
    agent.reset();
    agent.behavior.interaction = Some(target);
    ctx.mobility.head_to(agent, point, Travel::Commute)?;
    agent.say("Off to work", BubbleTone::Act, ctx.tuning.bubble_frames);
    Ok(())
}

/// Performance earned by one completed shift.
pub fn shift_performance(agent: &Agent) -> f32 {
    let mut perf = 10.0;
    if agent.mood > 80.0 {
        perf += 5.0;
    }
    if agent.has_buff(BuffKind::WellRested) {
        perf += 5.0;
    }
    if agent.needs.get(Need::Fun) < 30.0 {
        perf -= 5.0;
    }
    perf
}

/// End of shift: full salary, performance, stress, and a promotion attempt
/// when performance has passed the threshold.
pub fn clock_out(
    store: &mut AgentStore,
    me:    AgentId,
    ctx:   &TownContext<'_>,
    out:   &mut Narrative<'_>,
) -> BehaviorResult<PromotionOutcome> {
    let agent = store.agent_mut(me)?;
    let job = ctx.jobs.job(agent.career.job)?;

    agent.wallet.earn(job.salary);
    agent.say(format!("+${}", job.salary), BubbleTone::Money, ctx.tuning.bubble_frames);
    out.by(&agent.name, format!("Finished work as {}: +${}", job.title, job.salary), LogKind::Money);

    let perf = shift_performance(agent);
    agent.career.performance += perf;
    agent.add_buff(BuffKind::Stressed);
    agent.reset();

    let ready = agent.career.performance > ctx.tuning.promotion_threshold;
    if ready && job.level < ctx.jobs.top_level(job.company) {
        promote(store, me, ctx, out)
    } else {
        Ok(PromotionOutcome::NoOpening)
    }
}

/// Try for the next rung of `me`'s ladder.  Performance is spent either way.
pub fn promote(
    store: &mut AgentStore,
    me:    AgentId,
    ctx:   &TownContext<'_>,
    out:   &mut Narrative<'_>,
) -> BehaviorResult<PromotionOutcome> {
    let current = store.agent(me)?.career.job;
    let Some(next) = ctx.jobs.next_level(current) else {
        store.agent_mut(me)?.career.performance = 0.0;
        return Ok(PromotionOutcome::NoOpening);
    };
    let next_job = ctx.jobs.job(next)?;
    let bonus = ctx.tuning.promotion_bonus;
    let frames = ctx.tuning.bubble_frames;

    let holders = store.holders(next).count();
    let full = ctx.capacity(next).is_some_and(|cap| holders >= cap);

    if !full {
        let agent = store.agent_mut(me)?;
        agent.career.assign(next);
        agent.wallet.earn(bonus);
        agent.add_buff(BuffKind::Promoted);
        agent.say("Promoted!", BubbleTone::Money, frames);
        out.by(&agent.name, format!("Promoted to {}! Bonus +${bonus}", next_job.title), LogKind::Money);
        info!(agent = %agent.name, job = %next_job.key, "promoted");
        return Ok(PromotionOutcome::Promoted(next));
    }

    let incumbent = store
        .holders(next)
        .filter(|h| h.id != me)
        .min_by(|a, b| a.career.performance.total_cmp(&b.career.performance))
        .map(|h| h.id);
    let Some(incumbent) = incumbent else {
        store.agent_mut(me)?.career.performance = 0.0;
        return Ok(PromotionOutcome::NoOpening);
    };

    let weights = next_job.company.pk_weights(&ctx.tuning.pk);
    let key_skill = next_job.company.key_skill();
    let score = |a: &Agent| {
        let skill = key_skill.map_or(0.0, |s| a.skills.get(s));
        a.career.performance * weights.performance + a.mood * weights.mood + skill * weights.skill
    };

    let (a, b) = store.pair_mut(me, incumbent).ok_or(AgentError::UnknownAgent(incumbent))?;
    let (challenger, defender) = (score(a), score(b));
    debug!(
        challenger = %a.name, defender = %b.name, job = %next_job.key,
        challenger_score = challenger, defender_score = defender,
        "promotion contest"
    );

    if challenger > defender {
        a.career.assign(next);
        a.wallet.earn(bonus);
        a.add_buff(BuffKind::Promoted);
        a.say("I won!", BubbleTone::Money, frames);

        b.career.assign(current);
        b.add_buff(BuffKind::Demoted);
        if b.behavior.action.is_on_the_job() {
            b.reset();
        }
        b.say("Demoted...", BubbleTone::Bad, frames);

        out.by(
            &a.name,
            format!("Beat {} for the {} post! Bonus +${bonus}", b.name, next_job.title),
            LogKind::Money,
        );
        out.by(&b.name, format!("Lost the {} post to {}...", next_job.title, a.name), LogKind::Bad);
        info!(winner = %a.name, demoted = %b.name, job = %next_job.key, "promotion contest won");
        Ok(PromotionOutcome::WonContest { job: next, demoted: incumbent })
    } else {
        a.career.performance = 0.0;
        a.add_buff(BuffKind::Stressed);
        a.say("Not this time...", BubbleTone::Bad, frames);
        out.by(&a.name, format!("Challenged {} for {} and lost.", b.name, next_job.title), LogKind::Bad);
        Ok(PromotionOutcome::LostContest { incumbent })
    }
}

// ── Early leave ───────────────────────────────────────────────────────────────

/// Send an exhausted worker home with pay for the part of the shift worked.
/// Returns whether the agent left.
pub fn leave_early(agent: &mut Agent, ctx: &TownContext<'_>, out: &mut Narrative<'_>) -> BehaviorResult<bool> {
    if agent.behavior.action != Action::Working
        || agent.behavior.side_hustle.is_some()
        || agent.needs.get(Need::Energy) >= ctx.tuning.early_leave_energy
    {
        return Ok(false);
    }
    let job = ctx.jobs.job(agent.career.job)?;
    if job.is_unemployed() {
        return Ok(false);
    }

    let worked = job.minutes_into_shift(&ctx.time);
    let shift = job.shift_minutes().max(1);
    let pay = (job.salary as f64 * worked as f64 / shift as f64).floor() as i64;

    agent.wallet.earn(pay);
    agent.add_buff(BuffKind::Stressed);
    agent.career.left_early = Some(ctx.time.day);
    agent.say("Too tired... going home", BubbleTone::Bad, ctx.tuning.bubble_frames);
    out.by(&agent.name, format!("Left work early, exhausted: +${pay}"), LogKind::Money);
    debug!(agent = %agent.name, worked, shift, pay, "left work early");

    // Clears the shift timer along with the target.
    agent.reset();
    Ok(true)
}

// ── Career satisfaction ───────────────────────────────────────────────────────

/// Hourly probability that `agent` quits a job at `company`.
pub fn quit_chance(agent: &Agent, company: CompanyType) -> f64 {
    let mut chance = 0.0;
    if agent.mood < 30.0 {
        chance += 0.02;
    }
    let strained = agent
        .buffs
        .iter()
        .filter(|b| matches!(b.kind, BuffKind::Stressed | BuffKind::Anxious))
        .count();
    chance += 0.01 * strained as f64;
    if agent.wallet.money > 20_000 {
        chance += 0.02;
    }

    let t = agent.personality.temperament;
    let mismatch = match company {
        CompanyType::Store | CompanyType::Restaurant => !t.extravert,
        CompanyType::Design => !t.intuitive,
        _ => false,
    };
    if mismatch {
        chance += 0.01;
    }
    chance
}

/// Roll against [`quit_chance`]; on a hit the agent resigns.
pub fn career_satisfaction(
    agent: &mut Agent,
    rng:   &mut AgentRng,
    ctx:   &TownContext<'_>,
    out:   &mut Narrative<'_>,
) -> BehaviorResult<bool> {
    if agent.career.is_unemployed() {
        return Ok(false);
    }
    let job = ctx.jobs.job(agent.career.job)?;
    if !rng.gen_bool(quit_chance(agent, job.company)) {
        return Ok(false);
    }

    agent.career = Career::unemployed();
    agent.add_buff(BuffKind::Fired);
    if agent.behavior.action.is_on_the_job() {
        agent.reset();
    }
    agent.say("I quit!", BubbleTone::Bad, ctx.tuning.bubble_frames);
    out.system(format!("{} quit their job as {}.", agent.name, job.title));
    info!(agent = %agent.name, job = %job.key, "resigned");
    Ok(true)
}
