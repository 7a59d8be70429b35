//! Unit tests for town-mobility.

#[cfg(test)]
mod helpers {
    use town_agent::{Agent, AgentBuilder, Needs};
    use town_core::{AgentId, AgentRng, MapBounds, Tuning, Vec2};
    use crate::MobilityEngine;

    pub fn engine() -> MobilityEngine {
        MobilityEngine::new(MapBounds::default(), &Tuning::default())
    }

    /// An agent at (100, 100) with speed 5 and mood 60.
    pub fn walker() -> Agent {
        let mut rng = AgentRng::new(0, AgentId(0));
        let mut a = AgentBuilder::new(AgentId(0), MapBounds::default())
            .at(Vec2::new(100.0, 100.0))
            .needs(Needs::uniform(60.0))
            .build(&mut rng);
        a.speed = 5.0;
        a
    }
}

#[cfg(test)]
mod step {
    use super::helpers::{engine, walker};
    use town_agent::{Action, InteractionTarget};
    use town_core::{AgentId, ObjectId, Vec2};
    use crate::{MobilityEngine, StepOutcome, Travel};

    #[test]
    fn mood_modifier_bands() {
        assert_eq!(MobilityEngine::mood_modifier(95.0), 1.3);
        assert_eq!(MobilityEngine::mood_modifier(50.0), 1.0);
        assert_eq!(MobilityEngine::mood_modifier(10.0), 0.7);
    }

    #[test]
    fn no_target_is_stationary() {
        let mut a = walker();
        assert_eq!(engine().step(&mut a, 2.0), StepOutcome::Stationary);
        assert_eq!(a.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn walks_then_snaps_onto_target() {
        let eng = engine();
        let mut a = walker();
        a.behavior.interaction = Some(InteractionTarget::Object(ObjectId(0)));
        eng.head_to(&mut a, Vec2::new(200.0, 100.0), Travel::Walk).unwrap();
        assert_eq!(a.behavior.action, Action::Moving);

        // 5 * 1.0 * 2 * 0.1 = 1 px per frame.
        assert_eq!(eng.step(&mut a, 2.0), StepOutcome::EnRoute);
        assert!((a.pos.x - 101.0).abs() < 1e-4);

        let mut frames = 1;
        while eng.step(&mut a, 2.0) != StepOutcome::Arrived {
            frames += 1;
            assert!(frames < 200, "never arrived");
        }
        assert_eq!(a.pos, Vec2::new(200.0, 100.0));
        assert!(a.behavior.target.is_none());
        // Stop distance 8: arrival once within 8 px, i.e. after about 92 px.
        assert!((91..=93).contains(&frames), "{frames} frames");
    }

    #[test]
    fn partners_use_wider_stop_distance() {
        let eng = engine();
        let mut a = walker();
        a.behavior.interaction = Some(InteractionTarget::Agent(AgentId(3)));
        eng.head_to(&mut a, Vec2::new(130.0, 100.0), Travel::Walk).unwrap();
        assert_eq!(eng.step(&mut a, 2.0), StepOutcome::Arrived);
        assert_eq!(a.pos, Vec2::new(130.0, 100.0));
    }

    #[test]
    fn targets_clamped_and_validated() {
        let eng = engine();
        let mut a = walker();
        eng.head_to(&mut a, Vec2::new(-400.0, 100.0), Travel::Walk).unwrap();
        assert_eq!(a.behavior.target, Some(Vec2::new(10.0, 100.0)));
        assert!(eng.head_to(&mut a, Vec2::new(f32::NAN, 1.0), Travel::Walk).is_err());
    }
}

#[cfg(test)]
mod commute {
    use super::helpers::{engine, walker};
    use town_agent::Action;
    use town_core::Vec2;
    use crate::{StepOutcome, Travel};

    #[test]
    fn cap_teleports_onto_desk() {
        let eng = engine();
        let mut a = walker();
        let desk = Vec2::new(900.0, 500.0);
        eng.head_to(&mut a, desk, Travel::Commute).unwrap();
        assert_eq!(a.behavior.action, Action::Commuting);

        for _ in 0..90 {
            assert_eq!(eng.commute_minute(&mut a), StepOutcome::EnRoute);
        }
        let out = eng.commute_minute(&mut a);
        assert_eq!(out, StepOutcome::Teleported);
        assert!(out.reached());
        assert_eq!(a.pos, desk);
        assert!(a.behavior.target.is_none());
    }

    #[test]
    fn plain_walks_are_not_counted() {
        let eng = engine();
        let mut a = walker();
        eng.head_to(&mut a, Vec2::new(900.0, 500.0), Travel::Walk).unwrap();
        for _ in 0..200 {
            assert_eq!(eng.commute_minute(&mut a), StepOutcome::Stationary);
        }
        assert_eq!(a.behavior.commute_minutes, 0);
    }
}
