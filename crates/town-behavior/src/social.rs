//! Conversations between two residents.
//!
//! # Resolution
//!
//! 1. Keep the [`SOCIAL_ACTIONS`] whose gate admits the initiator's current
//!    view of the partner.
//! 2. Drop romantic actions if the initiator is not attracted to the
//!    partner's gender, or is committed elsewhere and faithful.
//! 3. Pick a romantic action with a personality-dependent probability,
//!    otherwise any remaining action.
//! 4. Romantic actions can be rebuffed.  Confessions and break-ups have
//!    their own outcomes; everything else moves both sides' view by
//!    `(value + 1.5 × compatibility) × own social modifier`.
//! 5. Loving acts make nearby admirers jealous.

use town_agent::{
    Action, Agent, AgentError, AgentStore, BubbleTone, BuffKind, Element, FriendLabel, InteractionTarget, RelAxis,
    Relationship, RomanceLabel,
};
use town_core::{AgentId, AgentRng, LogKind, minutes};

use crate::decision::wander_point;
use crate::{BehaviorResult, CannedDialogue, Intent, Narrative, TownContext, apply_intent, line_for};

// ── Action table ──────────────────────────────────────────────────────────────

/// Extra eligibility rule layered on top of an action's range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SocialGate {
    /// Value on the action's axis within `[min, max]`.  Romantic actions
    /// also need a romance already started.
    Range,
    /// First romantic move: no romance yet and romance below 20.
    Pickup,
    /// Not lovers yet, romance at least 40.
    Confess,
    /// Lovers whose romance fell below -60.
    Breakup,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SocialAction {
    pub key:   &'static str,
    pub label: &'static str,
    /// Base relationship delta.
    pub value: f32,
    pub axis:  RelAxis,
    pub min:   f32,
    pub max:   f32,
    /// Log entry kind; `Love` actions also spawn a heart.
    pub log:   LogKind,
    pub gate:  SocialGate,
}

const fn act(
    key: &'static str,
    label: &'static str,
    value: f32,
    axis: RelAxis,
    min: f32,
    max: f32,
    log: LogKind,
    gate: SocialGate,
) -> SocialAction {
    SocialAction { key, label, value, axis, min, max, log, gate }
}

use self::SocialGate::{Breakup, Confess, Pickup, Range};
use town_agent::RelAxis::{Friendship as F, Romance as R};

/// Every social action.  The first entry (`greet`) is the fallback when
/// nothing else is eligible.
pub const SOCIAL_ACTIONS: [SocialAction; 13] = [
    act("greet",     "greeted",          3.0,   F, -100.0, 100.0, LogKind::Chat, Range),
    act("chat",      "chatted with",     5.0,   F,   10.0, 100.0, LogKind::Chat, Range),
    act("joke",      "joked with",       12.0,  F,   30.0, 100.0, LogKind::Chat, Range),
    act("gossip",    "gossiped with",    8.0,   F,   50.0, 100.0, LogKind::Chat, Range),
    act("pickup",    "chatted up",       5.0,   R,    0.0,  20.0, LogKind::Love, Pickup),
    act("deep_talk", "had a deep talk with", 8.0, R,  20.0, 100.0, LogKind::Love, Range),
    act("flirt",     "flirted with",     10.0,  R,   30.0, 100.0, LogKind::Love, Range),
    act("hug",       "hugged",           15.0,  R,   50.0, 100.0, LogKind::Love, Range),
    act("kiss",      "kissed",           20.0,  R,   70.0, 100.0, LogKind::Love, Range),
    act("confess",   "confessed to",     30.0,  R,   40.0, 100.0, LogKind::Love, Confess),
    act("propose",   "proposed to",      50.0,  R,   90.0, 100.0, LogKind::Love, Range),
    act("breakup",   "broke up with",   -50.0,  R, -100.0, -60.0, LogKind::Bad,  Breakup),
    act("argue",     "argued with",     -15.0,  F, -100.0, 100.0, LogKind::Bad,  Range),
];

impl SocialAction {
    pub fn by_key(key: &str) -> Option<&'static SocialAction> {
        SOCIAL_ACTIONS.iter().find(|a| a.key == key)
    }

    #[inline]
    pub fn is_romantic(&self) -> bool {
        self.axis == RelAxis::Romance
    }

    /// Whether the initiator's view `rel` of the partner admits this action.
    pub fn eligible(&self, rel: &Relationship) -> bool {
        let in_range = |v: f32| v >= self.min && v <= self.max;
        match self.gate {
            SocialGate::Pickup => !rel.has_romance && rel.romance < 20.0,
            SocialGate::Confess => !rel.is_lover && rel.romance >= 40.0,
            SocialGate::Breakup => rel.is_lover && rel.romance < -60.0,
            SocialGate::Range => match self.axis {
                RelAxis::Friendship => in_range(rel.friendship),
                RelAxis::Romance => rel.has_romance && in_range(rel.romance),
            },
        }
    }

    fn tone(&self) -> BubbleTone {
        match self.log {
            LogKind::Love => BubbleTone::Love,
            LogKind::Bad => BubbleTone::Bad,
            _ => BubbleTone::Normal,
        }
    }
}

// ── Starting a conversation ───────────────────────────────────────────────────

/// `me` has walked up to `partner`.  Talk if they are still close and
/// free, otherwise wander off.
pub fn start_talk(
    store:   &mut AgentStore,
    me:      AgentId,
    partner: AgentId,
    rng:     &mut AgentRng,
    ctx:     &TownContext<'_>,
    out:     &mut Narrative<'_>,
) -> BehaviorResult<()> {
    if !store.contains(partner) {
        // Partner left town.
        store.agent_mut(me)?.reset();
        return Ok(());
    }

    let talk = minutes(ctx.tuning.restore_minutes.social);
    {
        let (a, b) = store.pair_mut(me, partner).ok_or(AgentError::UnknownAgent(partner))?;

        if a.pos.distance(b.pos) > ctx.tuning.talk_radius || !b.is_available() {
            let point = ctx.mobility.bounds.clamp(wander_point(rng));
            return apply_intent(a, Intent::Wander { point }, ctx);
        }

        a.behavior.action = Action::Talking;
        a.behavior.timer = talk;
        if b.behavior.action != Action::Talking {
            b.reset();
            b.behavior.action = Action::Talking;
            b.behavior.timer = talk;
            b.behavior.interaction = Some(InteractionTarget::Agent(me));
        }
    }
    perform_social(store, me, partner, rng, ctx, out).map(|_| ())
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Pick and resolve one social action from `me` toward `partner`.
/// Returns the action chosen.
pub fn perform_social(
    store:   &mut AgentStore,
    me:      AgentId,
    partner: AgentId,
    rng:     &mut AgentRng,
    ctx:     &TownContext<'_>,
    out:     &mut Narrative<'_>,
) -> BehaviorResult<&'static SocialAction> {
    let frames = ctx.tuning.bubble_frames;
    let (a, b) = store.pair_mut(me, partner).ok_or(AgentError::UnknownAgent(partner))?;

    let comp = a.personality.compatibility(&b.personality) as f32;
    let rel = *a.relationships.entry(partner);
    b.relationships.entry(me);
    let (old_romance, old_friend) = (rel.romance_label(), rel.friend_label());

    let chosen = choose_action(a, b, &rel, rng);

    let mut success = true;
    if chosen.is_romantic() {
        if b.personality.faithfulness > 70.0 && b.relationships.has_other_partner(me) {
            success = false;
        }
        if chosen.min > b.relationships.value(me, RelAxis::Romance) + 15.0 {
            success = false;
        }
        if chosen.gate == SocialGate::Breakup {
            success = true;
        }
    }

    let mut loving = false;
    if !success {
        a.say("...", BubbleTone::Bad, frames);
        b.say("No thanks...", BubbleTone::Bad, frames);
        a.relationships.adjust(partner, chosen.axis, -5.0);
        out.by(&a.name, format!("Tried to get close to {} but was turned down.", b.name), LogKind::Bad);
    } else if chosen.gate == SocialGate::Confess {
        if b.relationships.value(me, RelAxis::Romance) > 40.0 {
            a.relationships.entry(partner).is_lover = true;
            b.relationships.entry(me).is_lover = true;
            a.add_buff(BuffKind::InLove);
            b.add_buff(BuffKind::InLove);
            let text = line_for(ctx.dialogue, chosen.key, a, b);
            a.say(text, BubbleTone::Love, frames);
            out.by(&a.name, format!("Confessed to {}. They are now lovers!", b.name), LogKind::RelEvent);
            out.heart(a.pos);
        } else {
            a.relationships.adjust(partner, RelAxis::Romance, -10.0);
            a.say("...", BubbleTone::Bad, frames);
            out.by(&a.name, format!("Confessed to {} and was rejected...", b.name), LogKind::RelEvent);
        }
    } else if chosen.gate == SocialGate::Breakup {
        a.relationships.entry(partner).is_lover = false;
        b.relationships.entry(me).is_lover = false;
        a.add_buff(BuffKind::Heartbroken);
        b.add_buff(BuffKind::Heartbroken);
        a.say("It's over.", BubbleTone::Bad, frames);
        out.by(&a.name, format!("Broke up with {}...", b.name), LogKind::RelEvent);
    } else {
        let value = chosen.value + comp * 1.5;

        if chosen.is_romantic() {
            a.relationships.entry(partner).has_romance = true;
            b.relationships.entry(me).has_romance = true;
        }
        if chosen.key == "argue" && rel.romance > 60.0 {
            a.relationships.adjust(partner, RelAxis::Romance, -15.0);
            b.relationships.adjust(me, RelAxis::Romance, -15.0);
        }
        a.relationships.adjust(partner, chosen.axis, value * a.modifiers.social);
        b.relationships.adjust(me, chosen.axis, value * b.modifiers.social);

        let text = line_for(ctx.dialogue, chosen.key, a, b);
        a.say(text, chosen.tone(), frames);
        b.say(CannedDialogue::reply(chosen.key), BubbleTone::Normal, frames);
        out.by(
            &a.name,
            format!("{} {} ({} {:+})", chosen.label, b.name, chosen.axis.as_str(), value.floor() as i32),
            chosen.log,
        );

        if chosen.log == LogKind::Love {
            out.heart(a.pos);
            loving = true;
        }
    }

    log_milestone(a, b.id, &b.name, old_romance, old_friend, out);

    if loving {
        witness_love(store, me, partner, ctx, out)?;
    }
    Ok(chosen)
}

/// Choose among the actions `a`'s view `rel` of `b` admits.
fn choose_action(a: &Agent, b: &Agent, rel: &Relationship, rng: &mut AgentRng) -> &'static SocialAction {
    let mut available: Vec<&'static SocialAction> = SOCIAL_ACTIONS.iter().filter(|x| x.eligible(rel)).collect();

    let p = &a.personality;
    let committed = a.relationships.has_other_partner(b.id);
    let mut romantic_ok = p.attracted_to(&b.personality);
    if romantic_ok && committed {
        if p.faithfulness > 70.0 {
            romantic_ok = false;
        } else if p.faithfulness < 40.0 && rng.gen_bool(0.6) {
            romantic_ok = false;
        }
    }
    if !romantic_ok {
        available.retain(|x| !x.is_romantic());
    }
    if available.is_empty() {
        available.push(&SOCIAL_ACTIONS[0]);
    }

    let romantic: Vec<&'static SocialAction> = available.iter().copied().filter(|x| x.is_romantic()).collect();
    let mut chance = 0.4;
    if p.temperament.feeling {
        chance += 0.2;
    }
    if p.faithfulness < 40.0 {
        chance += 0.2;
    }
    if a.has_buff(BuffKind::InLove) {
        chance += 0.3;
    }

    if !romantic.is_empty() && rng.gen_bool(chance) {
        romantic[rng.gen_range(0..romantic.len())]
    } else {
        available[rng.gen_range(0..available.len())]
    }
}

/// Log transitions of `a`'s view of `other` into a milestone label.
fn log_milestone(
    a:          &Agent,
    other:      AgentId,
    other_name: &str,
    old_romance: RomanceLabel,
    old_friend:  FriendLabel,
    out:        &mut Narrative<'_>,
) {
    let Some(rel) = a.relationships.get(other) else {
        return;
    };
    let romance = rel.romance_label();
    if romance != old_romance && romance.is_milestone() {
        out.by(&a.name, format!("is now {romance} toward {other_name}"), LogKind::RelEvent);
    }
    let friend = rel.friend_label();
    if friend != old_friend && friend.is_milestone() {
        out.by(&a.name, format!("now sees {other_name} as a {friend}"), LogKind::RelEvent);
    }
}

// ── Jealousy ──────────────────────────────────────────────────────────────────

/// Everyone within `jealousy_radius` of `actor` (other than the couple)
/// checks whether the scene upsets them.
pub(crate) fn witness_love(
    store:  &mut AgentStore,
    actor:  AgentId,
    target: AgentId,
    ctx:    &TownContext<'_>,
    out:    &mut Narrative<'_>,
) -> BehaviorResult<()> {
    let a = store.agent(actor)?;
    let at = a.pos;
    let actor_name = a.name.clone();
    let target_name = store.agent(target)?.name.clone();

    let radius = ctx.tuning.jealousy_radius;
    let witnesses: Vec<AgentId> = store
        .iter()
        .filter(|w| w.id != actor && w.id != target && w.pos.distance(at) < radius)
        .map(|w| w.id)
        .collect();

    for id in witnesses {
        let w = store.agent_mut(id)?;
        get_jealous(w, (actor, &actor_name), (target, &target_name), ctx, out);
    }
    Ok(())
}

/// Jealousy threshold: 60, lower for feeling types and fire/water signs.
pub fn jealousy_sensitivity(agent: &Agent) -> f32 {
    let mut sensitivity = 60.0;
    if agent.personality.temperament.feeling {
        sensitivity -= 10.0;
    }
    if matches!(agent.personality.element, Element::Water | Element::Fire) {
        sensitivity -= 10.0;
    }
    sensitivity
}

fn get_jealous(
    w:      &mut Agent,
    actor:  (AgentId, &str),
    target: (AgentId, &str),
    ctx:    &TownContext<'_>,
    out:    &mut Narrative<'_>,
) {
    let sensitivity = jealousy_sensitivity(w);
    let rel = |w: &Agent, id: AgentId| w.relationships.value(id, RelAxis::Romance);
    if rel(w, actor.0) <= sensitivity && rel(w, target.0) <= sensitivity {
        return;
    }

    w.say("Jealous!", BubbleTone::Bad, ctx.tuning.bubble_frames);
    let impact = -40.0 * w.modifiers.social;
    for (id, name) in [actor, target] {
        let before = w.relationships.get(id).copied().unwrap_or_default();
        w.relationships.adjust(id, RelAxis::Friendship, impact);
        w.relationships.adjust(id, RelAxis::Romance, impact);
        log_milestone(w, id, name, before.romance_label(), before.friend_label(), out);
    }
    out.by(
        &w.name,
        format!("saw {} and {} being intimate and got jealous!", actor.1, target.1),
        LogKind::Jealous,
    );
}
