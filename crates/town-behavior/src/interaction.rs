//! Starting and finishing interactions.
//!
//! Dispatch is a total match over [`Utility`]; tags the engine does not know
//! (`Utility::Other`) fall through to the default arm and are simply "used"
//! for half an hour.

use town_agent::{
    Action, Agent, AgentStore, BubbleTone, BuffKind, InteractionTarget, RelAxis, SideHustle, VirtualTarget,
};
use town_core::{AgentId, AgentRng, LogKind, Need, ObjectId, Skill, minutes};
use town_world::Utility;

use crate::social::start_talk;
use crate::{BehaviorError, BehaviorResult, Narrative, TownContext};

const DRINK_PRICE: i64 = 5;
const BOOK_PRICE: i64 = 60;
const GIFT_PRICE: i64 = 50;

/// Called when an agent reaches its movement target.
///
/// Wandering agents have no interaction and just linger until their timer
/// runs out.
pub fn start_interaction(
    store: &mut AgentStore,
    me:    AgentId,
    rng:   &mut AgentRng,
    ctx:   &TownContext<'_>,
    out:   &mut Narrative<'_>,
) -> BehaviorResult<()> {
    match store.agent(me)?.behavior.interaction {
        None => Ok(()),
        Some(InteractionTarget::Agent(partner)) => start_talk(store, me, partner, rng, ctx, out),
        Some(InteractionTarget::Virtual(VirtualTarget::StandingWork)) => begin_work(store.agent_mut(me)?, ctx),
        Some(InteractionTarget::Object(id)) => start_object(store, me, id, rng, ctx, out),
    }
}

/// Sit down at a workstation (or the standing spot) until the shift ends.
pub(crate) fn begin_work(agent: &mut Agent, ctx: &TownContext<'_>) -> BehaviorResult<()> {
    let job = ctx.jobs.job(agent.career.job)?;
    let left = job.shift_minutes().saturating_sub(job.minutes_into_shift(&ctx.time));
    let b = &mut agent.behavior;
    b.action = Action::Working;
    b.target = None;
    // Shown to renderers only; the schedule check ends the shift.
    b.timer = minutes(left as f32);
    Ok(())
}

/// Minutes a need-restoring interaction takes: proportional to how empty
/// the need is, with a floor.
pub fn restore_minutes(agent: &Agent, need: Need, ctx: &TownContext<'_>) -> f32 {
    let missing = (100.0 - agent.needs.get(need)) / 100.0;
    (missing * ctx.tuning.restore_minutes.get(need)).max(ctx.tuning.min_restore_minutes)
}

fn start_object(
    store: &mut AgentStore,
    me:    AgentId,
    id:    ObjectId,
    rng:   &mut AgentRng,
    ctx:   &TownContext<'_>,
    out:   &mut Narrative<'_>,
) -> BehaviorResult<()> {
    let object = ctx.catalog.object(id)?;
    if !object.utility.is_interactable() {
        return Err(BehaviorError::NotInteractable(id));
    }

    // Someone else got there first (same-frame occupancy race): back off.
    if !object.multi_user && store.users_of(id).any(|o| o.id != me && o.behavior.target.is_none()) {
        store.agent_mut(me)?.reset();
        return Ok(());
    }

    let frames = ctx.tuning.bubble_frames;
    let agent = store.agent_mut(me)?;

    if let Some(cost) = object.cost {
        if cost > agent.wallet.money {
            agent.say("Too expensive...", BubbleTone::Bad, frames);
            agent.reset();
            return Ok(());
        }
        agent.wallet.spend(cost);
        out.by(&agent.name, format!("Paid for {}: -${cost}", object.label), LogKind::Money);
    }

    let mut gift = false;
    let (action, duration, verb): (Action, f32, String) = match &object.utility {
        Utility::Work => return begin_work(agent, ctx),
        Utility::BuyDrink => {
            if agent.wallet.money >= DRINK_PRICE {
                agent.wallet.spend(DRINK_PRICE);
                agent.needs.add(Need::Hunger, 5.0);
                agent.needs.add(Need::Fun, 5.0);
                agent.say("Gulp gulp", BubbleTone::Act, frames);
            }
            (Action::Using, 5.0, "Having a drink".into())
        }
        Utility::BuyBook => {
            if agent.wallet.money >= BOOK_PRICE {
                agent.wallet.spend(BOOK_PRICE);
                agent.needs.add(Need::Fun, 10.0);
                agent.skills.gain(Skill::Logic, 5.0);
                agent.say("Learned something", BubbleTone::Act, frames);
                out.by(&agent.name, format!("Bought a book -${BOOK_PRICE}"), LogKind::Money);
            }
            (Action::Using, 15.0, "Browsing books".into())
        }
        Utility::BuyGift => {
            if agent.wallet.money >= GIFT_PRICE {
                agent.wallet.spend(GIFT_PRICE);
                gift = true;
            }
            (Action::Using, 10.0, "Picking a gift".into())
        }
        Utility::Cinema(_) => {
            agent.add_buff(BuffKind::MovieFun);
            (Action::WatchingMovie, 120.0, "Watching a movie".into())
        }
        Utility::GymRun => (Action::Using, 60.0, "Running".into()),
        Utility::GymYoga => (Action::Using, 60.0, "Yoga".into()),
        Utility::EatOut => {
            agent.add_buff(BuffKind::GoodMeal);
            (Action::Eating, 60.0, "Dining out".into())
        }
        Utility::Gardening => (Action::Using, 90.0, "Gardening".into()),
        Utility::Fishing => (Action::Using, 120.0, "Fishing".into()),
        Utility::Cooking => (Action::Using, 90.0, "Practising cooking".into()),
        Utility::Computer => (Action::Using, 90.0, "Online".into()),
        Utility::Art => (Action::Using, 45.0, "Sketching".into()),
        Utility::Play => (Action::Using, 30.0, "Playing".into()),
        Utility::Skill(skill) => (Action::Using, 60.0, format!("Practising {skill}")),
        Utility::Energy => (Action::Sleeping, restore_minutes(agent, Need::Energy, ctx), "Sleeping".into()),
        Utility::Hunger => (Action::Eating, restore_minutes(agent, Need::Hunger, ctx), "Cooking a meal".into()),
        Utility::Bladder => (Action::Using, restore_minutes(agent, Need::Bladder, ctx), "Bathroom break".into()),
        Utility::Hygiene => (Action::Using, restore_minutes(agent, Need::Hygiene, ctx), "Showering".into()),
        Utility::Fun => (Action::Using, restore_minutes(agent, Need::Fun, ctx), "Having fun".into()),
        Utility::Comfort => (Action::Using, 60.0, "Lounging".into()),
        Utility::Decor | Utility::Other(_) => (Action::Using, 30.0, "Using".into()),
    };

    agent.behavior.action = action;
    agent.behavior.timer = minutes(duration);
    if rng.gen_bool(0.5) {
        agent.say(verb, BubbleTone::Act, frames);
    }

    if gift {
        deliver_gift(store, me, out)?;
    }
    Ok(())
}

/// The buyer's lover (if any) is pleased with the gift.
fn deliver_gift(store: &mut AgentStore, me: AgentId, out: &mut Narrative<'_>) -> BehaviorResult<()> {
    let buyer = store.agent(me)?;
    let name = buyer.name.clone();
    let lover = buyer.relationships.lover();

    let mut text = format!("Bought a gift -${GIFT_PRICE}");
    if let Some((_, recipient)) = lover.and_then(|lover| store.pair_mut(me, lover)) {
        recipient.relationships.adjust(me, RelAxis::Romance, 10.0);
        recipient.needs.add(Need::Fun, 20.0);
        text.push_str(&format!(" (for {})", recipient.name));
    }
    out.by(&name, text, LogKind::Money);
    Ok(())
}

/// End the current action: apply completion effects, then reset.
pub fn finish_action(agent: &mut Agent, ctx: &TownContext<'_>, out: &mut Narrative<'_>) -> BehaviorResult<()> {
    match agent.behavior.action {
        Action::Sleeping => {
            agent.needs.set(Need::Energy, 100.0);
            agent.add_buff(BuffKind::WellRested);
        }
        Action::Eating => agent.needs.set(Need::Hunger, 100.0),
        Action::Talking => agent.needs.set(Need::Social, 100.0),
        Action::Using => {
            if let Some(id) = agent.behavior.interacting_with_object() {
                let utility = &ctx.catalog.object(id)?.utility;
                if let Some(need) = utility.restores() {
                    if agent.needs.get(need) > 90.0 {
                        agent.needs.set(need, 100.0);
                    }
                }
                match utility {
                    Utility::Art => agent.add_buff(BuffKind::ArtInspired),
                    Utility::Play => agent.add_buff(BuffKind::Playful),
                    _ => {}
                }
            }
            if let Some(hustle) = agent.behavior.side_hustle {
                pay_side_hustle(agent, hustle, ctx, out);
            }
        }
        _ => {}
    }
    agent.reset();
    Ok(())
}

fn pay_side_hustle(agent: &mut Agent, hustle: SideHustle, ctx: &TownContext<'_>, out: &mut Narrative<'_>) {
    if !agent.career.is_unemployed() {
        return;
    }
    let skills = &agent.skills;
    let t = ctx.tuning;
    let (pay, what) = match hustle {
        SideHustle::Fishing => (t.fishing_pay.pay(skills.get(Skill::Fishing)), "selling fish"),
        SideHustle::Computer => (
            t.computer_pay.pay(skills.get(Skill::Logic).max(skills.get(Skill::Creativity))),
            "freelancing online",
        ),
        SideHustle::Garden => (t.garden_pay.pay(skills.get(Skill::Gardening)), "selling flowers"),
    };
    agent.wallet.earn(pay);
    agent.add_buff(BuffKind::SideHustleWin);
    agent.say(format!("+${pay}"), BubbleTone::Money, t.bubble_frames);
    out.by(&agent.name, format!("Earned ${pay} {what}"), LogKind::Money);
}
