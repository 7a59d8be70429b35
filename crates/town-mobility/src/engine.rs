//! Per-frame movement of agents toward their targets.

use town_agent::{Action, Agent, InteractionTarget};
use town_core::{MapBounds, Tuning, Vec2};

use crate::{MobilityError, MobilityResult, StepOutcome, Travel};

/// Pixels moved per unit of `speed × modifier × dt`.
const STEP_SCALE: f32 = 0.1;

/// Straight-line movement with mood-dependent pace.
#[derive(Clone, Debug)]
pub struct MobilityEngine {
    pub bounds:              MapBounds,
    pub object_stop:         f32,
    pub partner_stop:        f32,
    pub commute_cap_minutes: f32,
}

impl MobilityEngine {
    pub fn new(bounds: MapBounds, tuning: &Tuning) -> Self {
        Self {
            bounds,
            object_stop:         tuning.object_stop_distance,
            partner_stop:        tuning.partner_stop_distance,
            commute_cap_minutes: tuning.commute_cap_minutes,
        }
    }

    /// Pace multiplier: brisk when happy, sluggish when miserable.
    #[inline]
    pub fn mood_modifier(mood: f32) -> f32 {
        if mood > 90.0 {
            1.3
        } else if mood < 30.0 {
            0.7
        } else {
            1.0
        }
    }

    /// Send `agent` toward `point` (clamped to the map).  The interaction
    /// target, if any, must already be set so the right stop distance is
    /// used on arrival.
    pub fn head_to(&self, agent: &mut Agent, point: Vec2, travel: Travel) -> MobilityResult<()> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(MobilityError::InvalidTarget { agent: agent.id, x: point.x, y: point.y });
        }
        let b = &mut agent.behavior;
        b.target = Some(self.bounds.clamp(point));
        b.timer = 0.0;
        match travel {
            Travel::Walk => b.action = Action::Moving,
            Travel::Commute => {
                b.action = Action::Commuting;
                b.commute_minutes = 0;
            }
        }
        Ok(())
    }

    fn stop_distance(&self, agent: &Agent) -> f32 {
        match agent.behavior.interaction {
            Some(InteractionTarget::Agent(_)) => self.partner_stop,
            _ => self.object_stop,
        }
    }

    /// Advance `agent` one frame of `dt` speed units.
    pub fn step(&self, agent: &mut Agent, dt: f32) -> StepOutcome {
        let Some(target) = agent.behavior.target else {
            return StepOutcome::Stationary;
        };

        let dist = agent.pos.distance(target);
        let stride = agent.speed * Self::mood_modifier(agent.mood) * dt * STEP_SCALE;

        if dist <= self.stop_distance(agent) || stride >= dist {
            agent.pos = target;
            agent.behavior.target = None;
            return StepOutcome::Arrived;
        }

        let k = stride / dist;
        let next = Vec2::new(
            agent.pos.x + (target.x - agent.pos.x) * k,
            agent.pos.y + (target.y - agent.pos.y) * k,
        );
        agent.pos = self.bounds.clamp(next);
        StepOutcome::EnRoute
    }

    /// One simulated minute of commuting.  Past the cap the agent is placed
    /// on its target and [`StepOutcome::Teleported`] is returned.
    pub fn commute_minute(&self, agent: &mut Agent) -> StepOutcome {
        let b = &mut agent.behavior;
        if b.action != Action::Commuting {
            return StepOutcome::Stationary;
        }
        let Some(target) = b.target else {
            return StepOutcome::Stationary;
        };
        b.commute_minutes += 1;
        if b.commute_minutes as f32 > self.commute_cap_minutes {
            b.target = None;
            agent.pos = target;
            return StepOutcome::Teleported;
        }
        StepOutcome::EnRoute
    }
}
