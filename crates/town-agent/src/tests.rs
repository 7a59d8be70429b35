//! Unit tests for town-agent.

#[cfg(test)]
mod helpers {
    use town_core::{AgentId, AgentRng, MapBounds, Vec2};
    use crate::{Agent, AgentBuilder, AgentStore, Element, Temperament};

    pub fn agent(id: u32) -> Agent {
        let mut rng = AgentRng::new(1, AgentId(id));
        AgentBuilder::new(AgentId(id), MapBounds::default())
            .at(Vec2::new(100.0 + id as f32 * 10.0, 100.0))
            .build(&mut rng)
    }

    pub fn agent_with(id: u32, code: &str, element: Element) -> Agent {
        let mut rng = AgentRng::new(1, AgentId(id));
        let t: Temperament = code.parse().unwrap();
        AgentBuilder::new(AgentId(id), MapBounds::default())
            .temperament(t)
            .element(element)
            .build(&mut rng)
    }

    pub fn store_of(n: u32) -> AgentStore {
        let mut store = AgentStore::new();
        for i in 0..n {
            store.insert(agent(i)).unwrap();
        }
        store
    }
}

#[cfg(test)]
mod personality {
    use super::helpers::agent_with;
    use town_core::{Need, Skill};
    use crate::{Element, Gender, Orientation, Temperament};

    #[test]
    fn temperament_parse_and_display() {
        let t: Temperament = "enfj".parse().unwrap();
        assert!(t.extravert && t.intuitive && t.feeling && t.judging);
        assert_eq!(t.to_string(), "ENFJ");
        assert!("ENFX".parse::<Temperament>().is_err());
        assert!("ENF".parse::<Temperament>().is_err());
        assert_eq!(Temperament::all().count(), 16);
    }

    #[test]
    fn element_affinity() {
        assert_eq!(Element::Fire.affinity(Element::Fire), 2);
        assert_eq!(Element::Fire.affinity(Element::Air), 1);
        assert_eq!(Element::Water.affinity(Element::Earth), 1);
        assert_eq!(Element::Fire.affinity(Element::Water), -1);
    }

    #[test]
    fn compatibility_never_negative() {
        let a = agent_with(0, "ENFJ", Element::Fire);
        let b = agent_with(1, "ISTP", Element::Water);
        assert_eq!(a.personality.compatibility(&b.personality), 0);
        let c = agent_with(2, "ENFJ", Element::Fire);
        assert_eq!(a.personality.compatibility(&c.personality), 6);
    }

    #[test]
    fn orientation_gate() {
        assert!(Orientation::Hetero.allows(Gender::Male, Gender::Female));
        assert!(!Orientation::Hetero.allows(Gender::Male, Gender::Male));
        assert!(Orientation::Homo.allows(Gender::Female, Gender::Female));
        assert!(Orientation::Bi.allows(Gender::Female, Gender::Male));
    }

    #[test]
    fn modifiers_enfj_fire() {
        let a = agent_with(0, "ENFJ", Element::Fire);
        let m = a.modifiers;
        assert!((m.metabolism(Need::Social) - 1.5).abs() < 1e-5);
        assert!((m.metabolism(Need::Energy) - 0.81).abs() < 1e-5);
        assert!((m.metabolism(Need::Hygiene) - 0.8).abs() < 1e-5);
        assert!((m.social - 1.43).abs() < 1e-5);
        assert!((m.talent(Skill::Logic) - 1.3).abs() < 1e-5);
        assert!((m.talent(Skill::Athletics) - 1.2).abs() < 1e-5);
    }

    #[test]
    fn modifiers_istp_air() {
        let a = agent_with(0, "ISTP", Element::Air);
        let m = a.modifiers;
        assert!((m.metabolism(Need::Social) - 0.84).abs() < 1e-5);
        assert!((m.metabolism(Need::Fun) - 1.4).abs() < 1e-5);
        assert!((m.social - 0.8).abs() < 1e-5);
        // 1.0 base, x1.2 thinking, x1.1 air
        assert!((m.talent(Skill::Logic) - 1.32).abs() < 1e-5);
        assert!((m.talent(Skill::Cooking) - 1.3).abs() < 1e-5);
    }
}

#[cfg(test)]
mod needs {
    use town_core::{Need, Skill};
    use crate::{Needs, Skills};

    #[test]
    fn set_clamps_and_ignores_nan() {
        let mut n = Needs::uniform(50.0);
        n.set(Need::Fun, 140.0);
        assert_eq!(n.get(Need::Fun), 100.0);
        n.add(Need::Hunger, -80.0);
        assert_eq!(n.get(Need::Hunger), 0.0);
        n.set(Need::Social, f32::NAN);
        assert_eq!(n.get(Need::Social), 50.0);
    }

    #[test]
    fn average() {
        let mut n = Needs::uniform(60.0);
        n.set(Need::Energy, 0.0);
        assert!((n.average() - 50.0).abs() < 1e-5);
    }

    #[test]
    fn skills_never_decrease_through_gain() {
        let mut s = Skills::default();
        s.gain(Skill::Fishing, 5.0);
        s.gain(Skill::Fishing, -3.0);
        assert_eq!(s.get(Skill::Fishing), 5.0);
        s.gain(Skill::Fishing, 500.0);
        assert_eq!(s.get(Skill::Fishing), 100.0);
    }
}

#[cfg(test)]
mod buffs {
    use crate::{Buff, BuffKind, Buffs};

    #[test]
    fn refresh_instead_of_stack() {
        let mut b = Buffs::default();
        b.add(BuffKind::Stressed);
        for _ in 0..50 {
            b.tick_minute();
        }
        b.add(BuffKind::Stressed);
        assert_eq!(b.len(), 1);
        assert_eq!(b.iter().next().unwrap().remaining, BuffKind::Stressed.duration());
    }

    #[test]
    fn decays_one_per_minute_and_expires_at_zero() {
        let mut b = Buffs::default();
        b.add(BuffKind::Anxious);
        let full = BuffKind::Anxious.duration();
        for i in 1..full {
            b.tick_minute();
            assert_eq!(b.iter().next().unwrap().remaining, full - i);
        }
        b.tick_minute();
        assert!(b.is_empty());
        b.tick_minute();
        assert!(b.is_empty());
    }

    #[test]
    fn mood_delta_sums_polarity() {
        let mut b = Buffs::default();
        b.add(BuffKind::WellRested);
        b.add(BuffKind::InLove);
        b.add(BuffKind::Broke);
        assert_eq!(b.mood_delta(), 15.0);
    }

    #[test]
    fn restore_sanitises() {
        let b = Buffs::restore([
            Buff { kind: BuffKind::Playful, remaining: 9_999 },
            Buff { kind: BuffKind::Playful, remaining: 5 },
            Buff { kind: BuffKind::Fired, remaining: 0 },
        ]);
        assert_eq!(b.len(), 1);
        assert_eq!(b.iter().next().unwrap().remaining, BuffKind::Playful.duration());
    }
}

#[cfg(test)]
mod relationships {
    use town_core::AgentId;
    use crate::{FriendLabel, RelAxis, Relationship, Relationships, RomanceLabel};

    #[test]
    fn romance_spills_onto_friendship() {
        let mut r = Relationship::default();
        r.adjust(RelAxis::Romance, 10.0);
        assert_eq!(r.romance, 10.0);
        assert!((r.friendship - 3.0).abs() < 1e-5);
    }

    #[test]
    fn values_clamp() {
        let mut r = Relationship::default();
        r.adjust(RelAxis::Friendship, -500.0);
        assert_eq!(r.friendship, -100.0);
        assert_eq!(r.friend_label(), FriendLabel::Nemesis);
    }

    #[test]
    fn labels() {
        let mut r = Relationship { romance: 45.0, ..Default::default() };
        assert_eq!(r.romance_label(), RomanceLabel::Flirty);
        r.is_lover = true;
        assert_eq!(r.romance_label(), RomanceLabel::Lover);
        assert_eq!(FriendLabel::of(0.0), FriendLabel::Stranger);
        assert_eq!(FriendLabel::of(81.0), FriendLabel::BestFriend);
    }

    #[test]
    fn lazy_entries_and_lover() {
        let mut rels = Relationships::default();
        assert_eq!(rels.value(AgentId(4), RelAxis::Friendship), 0.0);
        assert!(rels.is_empty());
        rels.entry(AgentId(4)).is_lover = true;
        rels.entry(AgentId(4)).romance = 90.0;
        rels.adjust(AgentId(2), RelAxis::Friendship, 5.0);
        assert_eq!(rels.len(), 2);
        assert_eq!(rels.lover(), Some(AgentId(4)));
        assert!(rels.has_other_partner(AgentId(2)));
        assert!(!rels.has_other_partner(AgentId(4)));
    }

    #[test]
    fn restore_clamps() {
        let mut rels = Relationships::default();
        rels.restore(AgentId(1), Relationship { friendship: 300.0, romance: f32::NAN, ..Default::default() });
        let r = rels.get(AgentId(1)).unwrap();
        assert_eq!(r.friendship, 100.0);
        assert_eq!(r.romance, 0.0);
    }
}

#[cfg(test)]
mod wallet {
    use super::helpers::agent_with;
    use crate::{BuffKind, Buffs, Element, Wallet};

    #[test]
    fn cautious_budget() {
        let a = agent_with(0, "ISTJ", Element::Earth);
        let mut w = Wallet::new(1000);
        w.recompute_budget(&a.personality, &Buffs::default());
        assert_eq!(w.daily_budget, 120);
    }

    #[test]
    fn impulsive_budget() {
        let a = agent_with(0, "ENFP", Element::Fire);
        let mut w = Wallet::new(1000);
        w.recompute_budget(&a.personality, &Buffs::default());
        assert_eq!(w.daily_budget, 180);

        let mut stressed = Buffs::default();
        stressed.add(BuffKind::Stressed);
        w.recompute_budget(&a.personality, &stressed);
        assert_eq!(w.daily_budget, 360);
    }

    #[test]
    fn negative_money_gives_zero_budget() {
        let a = agent_with(0, "ENFP", Element::Fire);
        let mut w = Wallet::new(-50);
        w.recompute_budget(&a.personality, &Buffs::default());
        assert_eq!(w.daily_budget, 0);
    }

    #[test]
    fn counters() {
        let mut w = Wallet::new(100);
        w.spend(30);
        w.earn(50);
        assert_eq!(w.money, 120);
        assert_eq!(w.daily_expense, 30);
        assert_eq!(w.daily_income, 50);
        w.reset_daily();
        assert_eq!((w.daily_expense, w.daily_income), (0, 0));
        assert_eq!(w.money, 120);
    }
}

#[cfg(test)]
mod behavior {
    use town_core::{ObjectId, Vec2};
    use crate::{Action, Behavior, Bubble, BubbleTone, InteractionTarget, SideHustle};

    #[test]
    fn reset_clears_everything() {
        let mut b = Behavior {
            action:          Action::Working,
            target:          Some(Vec2::new(1.0, 2.0)),
            timer:           900.0,
            interaction:     Some(InteractionTarget::Object(ObjectId(3))),
            side_hustle:     Some(SideHustle::Fishing),
            commute_minutes: 12,
        };
        assert!(!b.is_idle());
        b.reset();
        assert_eq!(b, Behavior::default());
        assert!(b.is_idle());
        assert_eq!(b.action, Action::Idle);
    }

    #[test]
    fn unavailable_actions() {
        assert!(Action::Sleeping.is_unavailable());
        assert!(Action::Working.is_unavailable());
        assert!(!Action::Commuting.is_unavailable());
        assert!(Action::Commuting.is_on_the_job());
        assert_eq!(Action::WatchingMovie.as_str(), "watching_movie");
    }

    #[test]
    fn bubble_counts_down() {
        let mut b = Bubble::default();
        assert_eq!(b.visible(), None);
        b.show("Hello!", BubbleTone::Normal, 2);
        assert_eq!(b.visible(), Some("Hello!"));
        b.tick();
        b.tick();
        assert_eq!(b.visible(), None);
        b.tick();
        assert_eq!(b.frames, 0);
    }
}

#[cfg(test)]
mod builder {
    use town_core::{AgentId, AgentRng, JobId, MapBounds, Need, Vec2};
    use town_schedule::JobRegistry;
    use crate::{AgentBuilder, Gender, LifeGoal, pick_initial_job};

    #[test]
    fn deterministic_for_same_seed() {
        let build = || {
            let mut rng = AgentRng::new(99, AgentId(5));
            AgentBuilder::new(AgentId(5), MapBounds::default()).build(&mut rng)
        };
        let (a, b) = (build(), build());
        assert_eq!(a.name, b.name);
        assert_eq!(a.personality, b.personality);
        assert_eq!(a.wallet.money, b.wallet.money);
        assert_eq!(a.needs, b.needs);
        assert_eq!(a.pos, b.pos);
    }

    #[test]
    fn randomised_fields_in_range() {
        let bounds = MapBounds::default();
        for i in 0..50 {
            let mut rng = AgentRng::new(3, AgentId(i));
            let a = AgentBuilder::new(AgentId(i), bounds).build(&mut rng);
            assert!((2000..5000).contains(&a.wallet.money));
            assert!((20..30).contains(&a.age));
            assert!(a.speed >= 6.0 && a.speed <= 8.25);
            assert!((0.0..=100.0).contains(&a.personality.faithfulness));
            for need in Need::ALL {
                let v = a.needs.get(need);
                assert!((60.0..=99.0).contains(&v), "{need} = {v}");
            }
            assert!(a.skills.iter().all(|(_, v)| v == 0.0));
            assert!(bounds.contains(a.pos));
            assert!((0.0..=100.0).contains(&a.mood));
            assert!(a.career.is_unemployed());
            assert!(a.name.contains(' '));
        }
    }

    #[test]
    fn overrides_win() {
        let mut rng = AgentRng::new(3, AgentId(0));
        let a = AgentBuilder::new(AgentId(0), MapBounds::default())
            .name("Ada Moss")
            .gender(Gender::Female)
            .money(7)
            .job(JobId(2))
            .at(Vec2::new(-50.0, 5_000.0))
            .build(&mut rng);
        assert_eq!(a.name, "Ada Moss");
        assert_eq!(a.personality.gender, Gender::Female);
        assert_eq!(a.wallet.money, 7);
        assert_eq!(a.career.job, JobId(2));
        assert_eq!(a.pos, Vec2::new(10.0, 990.0));
    }

    #[test]
    fn initial_job_respects_capacity() {
        let reg = JobRegistry::default_ladders();
        let mut caps: Vec<Option<usize>> = vec![Some(1); reg.len()];
        caps[0] = None;
        let full: Vec<usize> = vec![1; reg.len()];
        for i in 0..20 {
            let mut rng = AgentRng::new(i, AgentId(0));
            let job = pick_initial_job(&mut rng, LifeGoal::Millionaire, &reg, &caps, &full);
            assert_eq!(job, reg.unemployed());
        }
    }

    #[test]
    fn initial_job_only_picks_open_rungs() {
        let reg = JobRegistry::default_ladders();
        let caps: Vec<Option<usize>> = reg.iter().map(|j| if j.is_unemployed() { None } else { Some(2) }).collect();
        let mut holders = vec![2; reg.len()];
        let waiter = reg.by_key("waiter").unwrap();
        holders[waiter.index()] = 0;
        for i in 0..40 {
            let mut rng = AgentRng::new(i, AgentId(1));
            let job = pick_initial_job(&mut rng, LifeGoal::Easygoing, &reg, &caps, &holders);
            assert!(job == waiter || job == reg.unemployed());
        }
    }
}

#[cfg(test)]
mod store {
    use super::helpers::{agent, store_of};
    use town_core::{AgentId, JobId, ObjectId};
    use crate::{AgentError, AgentRngs, AgentStore, InteractionTarget, RelAxis};

    #[test]
    fn insert_rejects_duplicates() {
        let mut store = store_of(2);
        assert!(matches!(store.insert(agent(1)), Err(AgentError::DuplicateAgent(AgentId(1)))));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut store = store_of(3);
        assert_eq!(store.allocate_id(), AgentId(3));
        store.remove(AgentId(2)).unwrap();
        assert_eq!(store.allocate_id(), AgentId(4));
    }

    #[test]
    fn pair_mut_in_argument_order() {
        let mut store = store_of(3);
        let (a, b) = store.pair_mut(AgentId(2), AgentId(0)).unwrap();
        assert_eq!((a.id, b.id), (AgentId(2), AgentId(0)));
        a.relationships.adjust(b.id, RelAxis::Friendship, 10.0);
        assert!(store.pair_mut(AgentId(1), AgentId(1)).is_none());
        assert!(store.pair_mut(AgentId(1), AgentId(9)).is_none());
        assert_eq!(store.get(AgentId(2)).unwrap().relationships.value(AgentId(0), RelAxis::Friendship), 10.0);
    }

    #[test]
    fn remove_cleans_references() {
        let mut store = store_of(3);
        {
            let a = store.get_mut(AgentId(0)).unwrap();
            a.relationships.adjust(AgentId(1), RelAxis::Friendship, 20.0);
            a.behavior.interaction = Some(InteractionTarget::Agent(AgentId(1)));
        }
        let (pos, gone) = store.remove(AgentId(1)).unwrap();
        assert_eq!((pos, gone.id), (1, AgentId(1)));
        let a = store.get(AgentId(0)).unwrap();
        assert!(a.relationships.get(AgentId(1)).is_none());
        assert!(a.behavior.interaction.is_none());
        assert_eq!(store.position(AgentId(2)).unwrap(), 1);
        assert!(store.agent(AgentId(1)).is_err());
    }

    #[test]
    fn occupancy() {
        let mut store = store_of(2);
        store.get_mut(AgentId(0)).unwrap().behavior.interaction = Some(InteractionTarget::Object(ObjectId(5)));
        assert!(store.occupied_by_other(ObjectId(5), AgentId(1)));
        assert!(!store.occupied_by_other(ObjectId(5), AgentId(0)));
        assert!(!store.occupied_by_other(ObjectId(6), AgentId(1)));
        assert_eq!(store.users_of(ObjectId(5)).count(), 1);
    }

    #[test]
    fn holder_counts() {
        let mut store = store_of(3);
        store.get_mut(AgentId(0)).unwrap().career.assign(JobId(2));
        store.get_mut(AgentId(1)).unwrap().career.assign(JobId(2));
        store.get_mut(AgentId(2)).unwrap().career.assign(JobId(40));
        let counts = store.holder_counts(4);
        assert_eq!(counts, vec![0, 0, 2, 0]);
        assert_eq!(store.holders(JobId(2)).count(), 2);
    }

    #[test]
    fn rngs_track_store() {
        let mut store = AgentStore::new();
        let mut rngs = AgentRngs::new(1);
        for i in 0..3 {
            let pos = store.insert(agent(i)).unwrap();
            rngs.push(AgentId(i));
            assert_eq!(pos + 1, rngs.len());
        }
        let (pos, _) = store.remove(AgentId(0)).unwrap();
        rngs.remove(pos);
        assert_eq!(rngs.len(), store.len());
        assert!(rngs.get_mut(2).is_none());
        assert_eq!(AgentRngs::for_store(&store, 1).len(), 2);
    }
}

#[cfg(test)]
mod bounds {
    use proptest::prelude::*;
    use town_core::{AgentId, AgentRng, MapBounds, Need};
    use crate::{AgentBuilder, BuffKind};

    const KINDS: [BuffKind; 6] = [
        BuffKind::WellRested,
        BuffKind::InLove,
        BuffKind::HolidayJoy,
        BuffKind::Heartbroken,
        BuffKind::Broke,
        BuffKind::Fired,
    ];

    proptest! {
        #[test]
        fn needs_and_mood_stay_in_range(
            seed in any::<u64>(),
            deltas in prop::collection::vec((0usize..Need::COUNT, -500.0f32..500.0), 0..40),
            buffs in prop::collection::vec(0usize..KINDS.len(), 0..6),
        ) {
            let mut rng = AgentRng::new(seed, AgentId(0));
            let mut a = AgentBuilder::new(AgentId(0), MapBounds::default()).build(&mut rng);
            for (i, d) in deltas {
                a.needs.add(Need::ALL[i], d);
            }
            for k in buffs {
                a.add_buff(KINDS[k]);
            }
            a.update_mood();
            for (_, v) in a.needs.iter() {
                prop_assert!((0.0..=100.0).contains(&v));
            }
            prop_assert!((0.0..=100.0).contains(&a.mood));
        }
    }
}
