//! Unit and scenario tests for town-sim.

#[cfg(test)]
mod helpers {
    use town_agent::{Action, Agent, AgentBuilder, Gender, InteractionTarget, Needs, Orientation, Temperament};
    use town_core::{AgentId, AgentRng, EventLog, GameTime, MapBounds, Need, ObjectId, SimConfig, Vec2, minutes};
    use town_world::{CatalogBuilder, ObjectCatalog, Rect, Utility};

    use crate::SimObserver;

    /// Speed 60: every frame is one simulated minute.
    pub fn config(initial_agents: usize) -> SimConfig {
        SimConfig { initial_agents, start_speed: 60, ..SimConfig::default() }
    }

    /// Bed (object 0), fridge (1), toilet (2).
    pub fn flat() -> ObjectCatalog {
        let mut b = CatalogBuilder::new();
        b.add("bed", Utility::Energy, Rect::new(40.0, 40.0, 40.0, 60.0));
        b.add("fridge", Utility::Hunger, Rect::new(120.0, 40.0, 30.0, 30.0));
        b.add("toilet", Utility::Bladder, Rect::new(200.0, 40.0, 20.0, 20.0));
        b.build().unwrap()
    }

    pub const BED: ObjectId = ObjectId(0);

    pub fn resident(id: u32, pos: Vec2) -> Agent {
        let mut rng = AgentRng::new(7, AgentId(id));
        AgentBuilder::new(AgentId(id), MapBounds::default())
            .name(format!("Resident {id}"))
            .at(pos)
            .gender(Gender::Female)
            .orientation(Orientation::Hetero)
            .temperament(Temperament { extravert: false, intuitive: true, feeling: false, judging: true })
            .needs(Needs::uniform(80.0))
            .money(1000)
            .build(&mut rng)
    }

    /// A resident fast asleep in the bed for the next ten hours.
    pub fn sleeper(id: u32) -> Agent {
        let mut a = resident(id, Vec2::new(60.0, 70.0));
        a.needs.set(Need::Energy, 20.0);
        a.behavior.action = Action::Sleeping;
        a.behavior.interaction = Some(InteractionTarget::Object(BED));
        a.behavior.timer = minutes(600.0);
        a.update_mood();
        a
    }

    /// One minute before midnight on the last day of the year, a Sunday.
    pub fn new_years_eve() -> GameTime {
        GameTime { day: 30, hour: 23, minute: 59, weekday: 7, month: 12, date: 30, speed: 0 }
    }

    pub fn logged(log: &EventLog, needle: &str) -> bool {
        log.iter().any(|e| e.text.contains(needle))
    }

    #[derive(Default)]
    pub struct Recorder {
        pub minutes: usize,
        pub hours:   usize,
        pub days:    usize,
        pub halts:   Vec<String>,
        pub ended:   bool,
    }

    impl SimObserver for Recorder {
        fn on_minute(&mut self, _time: &GameTime) {
            self.minutes += 1;
        }

        fn on_hour(&mut self, _time: &GameTime) {
            self.hours += 1;
        }

        fn on_day(&mut self, _time: &GameTime, _agents: &town_agent::AgentStore, _jobs: &town_schedule::JobRegistry) {
            self.days += 1;
        }

        fn on_halt(&mut self, _time: &GameTime, reason: &str) {
            self.halts.push(reason.to_owned());
        }

        fn on_sim_end(&mut self, _time: &GameTime) {
            self.ended = true;
        }
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::helpers::{config, flat, logged, resident};
    use town_core::{AgentId, MapBounds, Vec2};
    use crate::{SimBuilder, SimError};

    #[test]
    fn random_newcomers_move_in() {
        let sim = SimBuilder::new(config(4)).build().unwrap();
        assert_eq!(sim.store.len(), 4);
        assert_eq!(sim.rngs.len(), 4);
        assert_eq!(sim.log.len(), 4);
        assert!(logged(&sim.log, "moved into town"));
        assert_eq!(sim.clock.time.speed, 60);
    }

    #[test]
    fn given_residents_replace_newcomers() {
        let sim = SimBuilder::new(config(4))
            .catalog(flat())
            .agents(vec![resident(0, Vec2::new(50.0, 50.0)), resident(1, Vec2::new(90.0, 50.0))])
            .build()
            .unwrap();
        assert_eq!(sim.store.len(), 2);
        assert!(sim.log.is_empty());
    }

    #[test]
    fn duplicate_resident_ids_error() {
        let result = SimBuilder::new(config(0))
            .catalog(flat())
            .agents(vec![resident(3, Vec2::new(50.0, 50.0)), resident(3, Vec2::new(90.0, 50.0))])
            .build();
        assert!(matches!(result, Err(SimError::Agent(_))));
    }

    #[test]
    fn map_smaller_than_margins_errors() {
        let mut cfg = config(0);
        cfg.map = MapBounds { width: 15.0, height: 500.0, margin: 10.0 };
        assert!(matches!(SimBuilder::new(cfg).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn capacities_follow_the_catalog() {
        let sim = SimBuilder::new(config(0)).build().unwrap();
        assert_eq!(sim.capacities.len(), sim.jobs.len());
        assert_eq!(sim.capacities[0], None);
        assert!(sim.store.get(AgentId(0)).is_none());
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frame_tests {
    use super::helpers::{Recorder, config, flat, logged, new_years_eve, resident, sleeper};
    use town_agent::{Action, BuffKind, InteractionTarget};
    use town_core::{AgentId, GameTime, ObjectId, Vec2, minutes};
    use crate::{NoopObserver, SimBuilder, SimError, SimObserver};

    #[test]
    fn each_frame_at_speed_60_is_a_minute() {
        let mut sim = SimBuilder::new(config(0)).catalog(flat()).build().unwrap();
        let mut obs = Recorder::default();
        sim.run_frames(120, &mut obs).unwrap();
        assert_eq!(obs.minutes, 120);
        assert_eq!(obs.hours, 2);
        assert_eq!(sim.clock.time.hour, 10);
        assert!(obs.ended);
    }

    #[test]
    fn slow_speed_needs_several_frames_per_minute() {
        let mut cfg = config(0);
        cfg.start_speed = 2;
        let mut sim = SimBuilder::new(cfg).catalog(flat()).build().unwrap();
        let mut obs = Recorder::default();
        sim.run_frames(29, &mut obs).unwrap();
        assert_eq!(obs.minutes, 0);
        sim.frame(&mut obs).unwrap();
        assert_eq!(obs.minutes, 1);
    }

    #[test]
    fn calendar_rollover_resets_daily_counters_once() {
        let mut a = sleeper(0);
        a.wallet.daily_expense = 40;
        a.wallet.daily_income = 300;
        let mut sim = SimBuilder::new(config(0))
            .catalog(flat())
            .agents(vec![a])
            .start_time(new_years_eve())
            .build()
            .unwrap();
        let mut obs = Recorder::default();

        let events = sim.frame(&mut obs).unwrap();
        assert!(events.minute && events.hour && events.day);
        let t = sim.clock.time;
        assert_eq!((t.day, t.date, t.month, t.weekday), (31, 1, 1, 1));
        assert_eq!((t.hour, t.minute), (0, 0));

        let agent = sim.store.agent(AgentId(0)).unwrap();
        assert_eq!(agent.wallet.daily_expense, 0);
        assert_eq!(agent.wallet.daily_income, 0);
        assert!(agent.has_buff(BuffKind::HolidayJoy));
        assert_eq!(agent.behavior.action, Action::Sleeping);
        assert!(logged(&sim.log, "A new day has begun."));
        assert_eq!(obs.days, 1);

        // An hour boundary is not a rollover.
        sim.store.agent_mut(AgentId(0)).unwrap().wallet.daily_expense = 25;
        sim.run_frames(60, &mut obs).unwrap();
        assert_eq!(sim.clock.time.hour, 1);
        assert_eq!(obs.hours, 2);
        assert_eq!(obs.days, 1);
        assert_eq!(sim.store.agent(AgentId(0)).unwrap().wallet.daily_expense, 25);
    }

    #[test]
    fn dangling_object_reference_halts_the_clock() {
        let mut a = resident(0, Vec2::new(50.0, 50.0));
        a.behavior.action = Action::Using;
        a.behavior.interaction = Some(InteractionTarget::Object(ObjectId(999)));
        a.behavior.timer = minutes(10.0);
        let mut sim = SimBuilder::new(config(0)).catalog(flat()).agents(vec![a]).build().unwrap();
        let mut obs = Recorder::default();

        let err = sim.frame(&mut obs).unwrap_err();
        assert!(matches!(err, SimError::Halted(_)));
        assert!(sim.clock.is_paused());
        assert!(sim.is_halted());
        assert_eq!(obs.halts.len(), 1);
        assert!(sim.log.latest().unwrap().text.starts_with("Simulation stopped"));

        // Stopped means stopped.
        let before = sim.clock.time;
        assert_eq!(sim.frame(&mut obs).unwrap(), Default::default());
        assert_eq!(sim.clock.time, before);
    }

    struct Grenade;

    impl SimObserver for Grenade {
        fn on_minute(&mut self, _time: &GameTime) {
            panic!("observer exploded");
        }
    }

    #[test]
    fn panic_inside_a_frame_halts_instead_of_crashing() {
        let mut sim = SimBuilder::new(config(0)).catalog(flat()).build().unwrap();
        let err = sim.frame(&mut Grenade).unwrap_err();
        match err {
            SimError::Halted(reason) => assert!(reason.contains("observer exploded")),
            other => panic!("expected a halt, got {other:?}"),
        }
        assert!(sim.clock.is_paused());

        sim.set_speed(60);
        assert!(!sim.is_halted());
        sim.frame(&mut NoopObserver).unwrap();
    }

    #[test]
    fn run_frames_reports_end_even_after_a_halt() {
        let mut a = resident(0, Vec2::new(50.0, 50.0));
        a.behavior.action = Action::Using;
        a.behavior.interaction = Some(InteractionTarget::Object(ObjectId(999)));
        a.behavior.timer = minutes(10.0);
        let mut sim = SimBuilder::new(config(0)).catalog(flat()).agents(vec![a]).build().unwrap();
        let mut obs = Recorder::default();
        assert!(sim.run_frames(10, &mut obs).is_err());
        assert!(obs.ended);
    }

    #[test]
    fn particles_fade_while_paused() {
        let mut cfg = config(0);
        cfg.start_speed = 0;
        let mut sim = SimBuilder::new(cfg).catalog(flat()).build().unwrap();
        sim.effects.spawn_heart(Vec2::new(10.0, 10.0));
        sim.run_frames(100, &mut NoopObserver).unwrap();
        assert!(sim.particles().is_empty());
    }

    #[test]
    fn a_full_day_in_the_shipped_town_runs_clean() {
        let mut sim = SimBuilder::new(config(6)).build().unwrap();
        let mut obs = Recorder::default();
        sim.run_frames(24 * 60, &mut obs).unwrap();
        assert!(!sim.is_halted());
        assert_eq!(obs.days, 1);

        for agent in sim.store.iter() {
            assert!((0.0..=100.0).contains(&agent.mood), "{} mood {}", agent.name, agent.mood);
            for (need, v) in agent.needs.iter() {
                assert!((0.0..=100.0).contains(&v), "{} {need:?} = {v}", agent.name);
            }
        }
        let holders = sim.store.holder_counts(sim.jobs.len());
        for (i, cap) in sim.capacities.iter().enumerate() {
            if let Some(cap) = cap {
                assert!(holders[i] <= *cap, "job {i}: {} holders, capacity {cap}", holders[i]);
            }
        }
    }
}

// ── Fast clock ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fast_clock_tests {
    use super::helpers::{config, flat, logged, resident};
    use town_agent::{Action, Career};
    use town_core::{AgentId, GameTime, Need, Vec2};
    use crate::{NoopObserver, SimBuilder};

    /// Tuesday 2 January, 09:00.
    fn tuesday_morning() -> GameTime {
        GameTime { day: 2, hour: 9, minute: 0, weekday: 2, month: 1, date: 2, speed: 0 }
    }

    #[test]
    fn speed_200_workday_ends_at_clock_out() {
        let mut cfg = config(0);
        cfg.start_speed = 200;
        let mut sim = SimBuilder::new(cfg)
            .catalog(flat())
            .agents(vec![resident(0, Vec2::new(0.0, 0.0))])
            .start_time(tuesday_morning())
            .build()
            .unwrap();

        let intern = sim.jobs.by_key("dev_intern").unwrap();
        let salary = sim.jobs.job(intern).unwrap().salary;
        let spot = sim.config.tuning.standing_work_spot;
        {
            let a = sim.store.agent_mut(AgentId(0)).unwrap();
            a.career = Career::with_job(intern);
            a.pos = spot;
            a.needs.set(Need::Energy, 100.0);
        }

        let mut clocked_in = None;
        let mut clocked_out = None;
        while sim.clock.time.hour < 19 {
            sim.frame(&mut NoopObserver).unwrap();
            let t = sim.clock.time;
            let working = sim.store.agent(AgentId(0)).unwrap().behavior.action == Action::Working;
            if working && clocked_in.is_none() {
                clocked_in = Some((t.hour, t.minute));
            }
            if !working && clocked_in.is_some() && clocked_out.is_none() {
                clocked_out = Some((t.hour, t.minute));
            }
        }

        assert_eq!(clocked_in, Some((9, 1)));
        assert_eq!(clocked_out, Some((18, 0)));
        let a = sim.store.agent(AgentId(0)).unwrap();
        assert_eq!(a.wallet.daily_income, salary);
        assert_eq!(a.career.left_early, None);
        assert_eq!(sim.log.iter().filter(|e| e.text.contains("Finished work")).count(), 1);
        assert!(!logged(&sim.log, "Left work early"));
    }
}

// ── Persistence ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod save_tests {
    use super::helpers::{BED, config, flat, logged, new_years_eve, resident, sleeper};
    use town_agent::{Action, InteractionTarget};
    use town_core::{AgentId, ObjectId, Vec2, minutes};
    use crate::{MemoryStore, NoopObserver, SAVE_VERSION, SaveError, SaveResult, SaveState, SaveStore, SimBuilder};

    fn busy_town() -> crate::Sim {
        let mut talker = resident(0, Vec2::new(100.0, 100.0));
        talker.behavior.action = Action::Talking;
        talker.behavior.interaction = Some(InteractionTarget::Agent(AgentId(1)));
        talker.behavior.timer = minutes(20.0);

        let mut user = resident(1, Vec2::new(130.0, 100.0));
        user.behavior.action = Action::Using;
        user.behavior.interaction = Some(InteractionTarget::Object(ObjectId(1)));
        user.behavior.timer = minutes(15.0);
        user.wallet.money = 4321;
        user.relationships.adjust(AgentId(0), town_agent::RelAxis::Friendship, 25.0);

        let mut b = SimBuilder::new(config(0)).catalog(flat());
        b = b.agents(vec![talker, user, sleeper(2)]);
        let mut sim = b.build().unwrap();
        sim.store.agent_mut(AgentId(2)).unwrap().career.assign(sim.jobs.by_key("developer").unwrap());
        sim.log.system(&sim.clock.time, "hello");
        sim
    }

    #[test]
    fn round_trip_keeps_residents_and_drops_live_interactions() {
        let sim = busy_town();
        let blob = sim.save_state().to_json().unwrap();

        let mut other = SimBuilder::new(config(0)).catalog(flat()).build().unwrap();
        assert!(other.restore_blob(&blob).unwrap());
        assert_eq!(other.store.len(), sim.store.len());
        assert_eq!(other.rngs.len(), other.store.len());

        for (before, after) in sim.store.iter().zip(other.store.iter()) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.name, after.name);
            assert_eq!(before.wallet.money, after.wallet.money);
            assert_eq!(
                sim.jobs.job(before.career.job).unwrap().title,
                other.jobs.job(after.career.job).unwrap().title
            );
            for ((_, x), (_, y)) in before.needs.iter().zip(after.needs.iter()) {
                assert!((x - y).abs() < 1e-4);
            }
            assert!(after.behavior.interacting_with_agent().is_none());
        }

        let talker = other.store.agent(AgentId(0)).unwrap();
        assert_eq!(talker.behavior.action, Action::Idle);
        assert!(talker.behavior.is_idle());
        assert_eq!(other.store.agent(AgentId(1)).unwrap().behavior.action, Action::Idle);
        assert_eq!(other.store.agent(AgentId(1)).unwrap().relationships.value(AgentId(0), town_agent::RelAxis::Friendship), 25.0);

        let sleeper = other.store.agent(AgentId(2)).unwrap();
        assert_eq!(sleeper.behavior.action, Action::Sleeping);
        assert_eq!(sleeper.behavior.interacting_with_object(), Some(BED));
        assert!(sleeper.behavior.timer > 0.0);

        assert!(logged(&other.log, "hello"));
    }

    #[test]
    fn vanished_job_falls_back_to_unemployed() {
        let sim = busy_town();
        let mut state = sim.save_state();
        state.sims[2].job = "astronaut".to_owned();
        state.sims[2].performance = 120.0;

        let mut other = SimBuilder::new(config(0)).catalog(flat()).build().unwrap();
        other.restore(state).unwrap();
        let agent = other.store.agent(AgentId(2)).unwrap();
        assert!(agent.career.is_unemployed());
        assert_eq!(agent.career.performance, 0.0);
    }

    #[test]
    fn sleeper_in_a_missing_bed_wakes_up() {
        let sim = busy_town();
        let mut state = sim.save_state();
        state.sims[2].behavior.interaction = Some(InteractionTarget::Object(ObjectId(77)));

        let mut other = SimBuilder::new(config(0)).catalog(flat()).build().unwrap();
        other.restore(state).unwrap();
        assert_eq!(other.store.agent(AgentId(2)).unwrap().behavior.action, Action::Idle);
    }

    #[test]
    fn other_version_resets_to_a_fresh_town() {
        let mut sim = busy_town();
        let blob = format!(r#"{{"version": {}, "sims": []}}"#, SAVE_VERSION + 1);
        assert!(!sim.restore_blob(&blob).unwrap());
        assert_eq!(sim.store.len(), sim.config.initial_agents);
        assert!(logged(&sim.log, "incompatible"));

        assert!(matches!(SaveState::from_json(&blob), Err(SaveError::Version { .. })));
    }

    #[test]
    fn rollover_writes_the_slot() {
        let slot = MemoryStore::new();
        let mut sim = SimBuilder::new(config(0))
            .catalog(flat())
            .agents(vec![sleeper(0)])
            .start_time(new_years_eve())
            .save_store(Box::new(slot.clone()))
            .build()
            .unwrap();
        assert!(slot.contents().is_none());

        sim.frame(&mut NoopObserver).unwrap();
        let saved = SaveState::from_json(&slot.contents().unwrap()).unwrap();
        assert_eq!(saved.time.day, 31);
        assert_eq!(saved.sims.len(), 1);
    }

    #[test]
    fn load_reads_the_attached_slot() {
        let slot = MemoryStore::new();
        let mut writer = busy_town();
        let mut handle = slot.clone();
        handle.write(&writer.save_state().to_json().unwrap()).unwrap();
        writer.store.clear();

        let mut sim = SimBuilder::new(config(2)).catalog(flat()).save_store(Box::new(slot)).build().unwrap();
        assert!(sim.load().unwrap());
        assert_eq!(sim.store.len(), 3);
        assert_eq!(sim.store.agent(AgentId(1)).unwrap().wallet.money, 4321);
    }

    struct FullDisk;

    impl SaveStore for FullDisk {
        fn write(&mut self, _blob: &str) -> SaveResult<()> {
            Err(SaveError::Backend("disk full".into()))
        }

        fn read(&mut self) -> SaveResult<Option<String>> {
            Ok(None)
        }
    }

    #[test]
    fn failed_save_is_logged_and_the_day_goes_on() {
        let mut sim = SimBuilder::new(config(0))
            .catalog(flat())
            .agents(vec![sleeper(0)])
            .start_time(new_years_eve())
            .save_store(Box::new(FullDisk))
            .build()
            .unwrap();
        sim.frame(&mut NoopObserver).unwrap();
        assert!(logged(&sim.log, "Save failed"));
        assert!(!sim.is_halted());
        sim.frame(&mut NoopObserver).unwrap();
    }

    #[test]
    fn no_slot_means_nothing_to_load() {
        let mut sim = SimBuilder::new(config(1)).catalog(flat()).build().unwrap();
        assert!(!sim.persist());
        assert!(!sim.load().unwrap());
        assert_eq!(sim.store.len(), 1);
    }
}

// ── UI commands and views ─────────────────────────────────────────────────────

#[cfg(test)]
mod view_tests {
    use super::helpers::{config, flat, logged, resident};
    use town_agent::BubbleTone;
    use town_core::{AgentId, Vec2};
    use crate::SimBuilder;

    #[test]
    fn selection_shows_in_views() {
        let mut sim = SimBuilder::new(config(0))
            .catalog(flat())
            .agents(vec![resident(0, Vec2::new(50.0, 50.0)), resident(1, Vec2::new(90.0, 50.0))])
            .build()
            .unwrap();
        assert!(sim.select_agent(AgentId(9)).is_err());
        sim.select_agent(AgentId(1)).unwrap();

        let views = sim.agent_views();
        assert_eq!(views.len(), 2);
        assert!(!views[0].selected);
        assert!(views[1].selected);

        sim.clear_selection();
        assert!(sim.agent_views().iter().all(|v| !v.selected));
    }

    #[test]
    fn views_carry_visible_bubbles_only() {
        let mut sim = SimBuilder::new(config(0))
            .catalog(flat())
            .agents(vec![resident(0, Vec2::new(50.0, 50.0))])
            .build()
            .unwrap();
        assert!(sim.agent_views()[0].bubble.is_none());

        sim.store.agent_mut(AgentId(0)).unwrap().say("Hi", BubbleTone::Act, 3);
        let bubble = sim.agent_views()[0].bubble.clone().unwrap();
        assert_eq!(bubble.text, "Hi");
        assert_eq!(bubble.frames_left, 3);
        assert_eq!(bubble.tone, BubbleTone::Act);
    }

    #[test]
    fn spawned_resident_gets_an_rng_and_a_log_line() {
        let mut sim = SimBuilder::new(config(2)).catalog(flat()).build().unwrap();
        let id = sim.spawn_agent().unwrap();
        assert_eq!(sim.store.len(), 3);
        assert_eq!(sim.rngs.len(), 3);
        assert!(sim.store.contains(id));
        let name = sim.store.agent(id).unwrap().name.clone();
        assert!(logged(&sim.log, &format!("{name} moved into town.")));
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use std::io::Write;
    use std::path::Path;

    use town_core::SimConfig;
    use crate::{SimError, load_config, load_or_default, parse_config};

    #[test]
    fn missing_sections_keep_defaults() {
        let cfg = parse_config("seed = 7\n[tuning]\npromotion_threshold = 200.0\n").unwrap();
        let defaults = SimConfig::default();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.tuning.promotion_threshold, 200.0);
        assert_eq!(cfg.initial_agents, defaults.initial_agents);
        assert_eq!(cfg.map, defaults.map);
        assert_eq!(cfg.tuning.pk, defaults.tuning.pk);
    }

    #[test]
    fn file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "initial_agents = 9\nstart_speed = 4").unwrap();
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.initial_agents, 9);
        assert_eq!(cfg.start_speed, 4);
    }

    #[test]
    fn bad_input_is_an_error_or_the_defaults() {
        assert!(matches!(parse_config("seed = \"many\""), Err(SimError::ConfigParse(_))));
        let missing = Path::new("/definitely/not/here/town.toml");
        assert!(matches!(load_config(missing), Err(SimError::ConfigRead { .. })));
        assert_eq!(load_or_default(missing), SimConfig::default());
    }
}
