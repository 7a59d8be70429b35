//! Unit tests for town-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, JobId, ObjectId};

    #[test]
    fn index_is_the_vec_slot() {
        assert_eq!(ObjectId(42).index(), 42);
        assert_eq!(JobId(3).index(), 3);
    }

    #[test]
    fn display_names_the_kind() {
        assert_eq!(AgentId(7).to_string(), "agent#7");
        assert_eq!(ObjectId(0).to_string(), "object#0");
        assert_eq!(JobId(12).to_string(), "job#12");
    }
}

#[cfg(test)]
mod geo {
    use crate::{MapBounds, Vec2};

    #[test]
    fn distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!((a.distance_sq(b) - 25.0).abs() < 1e-6);
    }

    #[test]
    fn offset_keeps_radius() {
        let c = Vec2::new(100.0, 100.0);
        let p = c.offset(1.234, 40.0);
        assert!((c.distance(p) - 40.0).abs() < 1e-3);
    }

    #[test]
    fn bounds_clamp_respects_margin() {
        let b = MapBounds::default();
        let p = b.clamp(Vec2::new(-50.0, 5000.0));
        assert_eq!(p, Vec2::new(10.0, 990.0));
        assert!(b.contains(p));
        assert!(!b.contains(Vec2::new(0.0, 0.0)));
    }
}

#[cfg(test)]
mod time {
    use crate::{GameTime, SimClock, minutes};

    fn clock_at(hour: u8, minute: u8, speed: u32) -> SimClock {
        SimClock::new(GameTime { hour, minute, speed, ..GameTime::default() })
    }

    #[test]
    fn minutes_are_sixty_units() {
        assert_eq!(minutes(30.0), 1800.0);
    }

    #[test]
    fn minute_elapses_after_sixty_units() {
        let mut c = clock_at(8, 0, 2);
        for _ in 0..29 {
            assert!(!c.advance().minute);
        }
        let ev = c.advance();
        assert!(ev.minute && !ev.hour && !ev.day);
        assert_eq!(c.time.minute, 1);
    }

    #[test]
    fn paused_clock_never_advances() {
        let mut c = clock_at(8, 0, 0);
        for _ in 0..1000 {
            assert_eq!(c.advance(), Default::default());
        }
        assert!(c.is_paused());
        assert_eq!(c.time.minute, 0);
    }

    #[test]
    fn hour_and_day_boundaries() {
        let mut c = clock_at(23, 59, 60);
        let ev = c.advance();
        assert!(ev.minute && ev.hour && ev.day);
        assert_eq!((c.time.day, c.time.hour, c.time.minute), (2, 0, 0));
        assert_eq!(c.time.weekday, 2);
    }

    #[test]
    fn calendar_wraps_date_month_and_weekday() {
        let mut t = GameTime { date: 30, month: 12, weekday: 7, ..GameTime::default() };
        t.roll_day();
        assert_eq!((t.date, t.month, t.weekday), (1, 1, 1));

        let mut t = GameTime { date: 30, month: 4, weekday: 3, ..GameTime::default() };
        t.roll_day();
        assert_eq!((t.date, t.month, t.weekday), (1, 5, 4));
    }

    #[test]
    fn stamp_format() {
        let t = GameTime { day: 3, hour: 7, minute: 5, ..GameTime::default() };
        assert_eq!(t.stamp(), "Day 3 07:05");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = AgentRng::new(7, AgentId(3));
        let mut b = AgentRng::new(7, AgentId(3));
        for _ in 0..20 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(7, AgentId(3));
        let mut b = AgentRng::new(7, AgentId(4));
        let sa: Vec<u64> = (0..4).map(|_| a.random()).collect();
        let sb: Vec<u64> = (0..4).map(|_| b.random()).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn pick_top_stays_in_window() {
        let mut r = AgentRng::new(1, AgentId(0));
        assert_eq!(r.pick_top(0, 3), None);
        for _ in 0..100 {
            assert!(r.pick_top(10, 3).unwrap() < 3);
            assert_eq!(r.pick_top(1, 3), Some(0));
        }
    }

    #[test]
    fn gen_bool_clamps() {
        let mut r = AgentRng::new(1, AgentId(0));
        assert!(r.gen_bool(2.0));
        assert!(!r.gen_bool(-1.0));
    }
}

#[cfg(test)]
mod kinds {
    use crate::{Need, Skill};

    #[test]
    fn parse_round_trip_names() {
        for n in Need::ALL {
            assert_eq!(n.as_str().parse::<Need>().unwrap(), n);
        }
        assert_eq!("fishing".parse::<Skill>().unwrap(), Skill::Fishing);
        assert!("juggling".parse::<Skill>().is_err());
    }

    #[test]
    fn indices_are_dense() {
        for (i, n) in Need::ALL.iter().enumerate() {
            assert_eq!(n.index(), i);
        }
        for (i, s) in Skill::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }
}

#[cfg(test)]
mod log {
    use crate::{EventLog, GameTime, LOG_CAPACITY, LogCategory, LogKind};

    #[test]
    fn newest_first_and_capped() {
        let t = GameTime::default();
        let mut log = EventLog::new();
        for i in 0..(LOG_CAPACITY + 25) {
            log.push(&t, Some("Ada"), format!("line {i}"), LogKind::Chat);
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(log.latest().unwrap().text, format!("line {}", LOG_CAPACITY + 24));
        assert_eq!(log.appended(), (LOG_CAPACITY + 25) as u64);
    }

    #[test]
    fn categories_follow_kind() {
        assert_eq!(LogKind::Money.category(), LogCategory::Sys);
        assert_eq!(LogKind::Jealous.category(), LogCategory::Relationship);
        assert_eq!(LogKind::RelEvent.category(), LogCategory::Relationship);
        assert_eq!(LogKind::Love.category(), LogCategory::Chat);
        assert_eq!(LogKind::Bad.category(), LogCategory::Chat);
    }

    #[test]
    fn system_entries_use_system_actor() {
        let mut log = EventLog::new();
        log.system(&GameTime::default(), "new day");
        let e = log.latest().unwrap();
        assert_eq!(e.actor, "system");
        assert_eq!(e.time, "Day 1 08:00");
    }

    #[test]
    fn since_yields_fresh_entries_oldest_first() {
        let t = GameTime::default();
        let mut log = EventLog::new();
        log.system(&t, "a");
        let mark = log.appended();
        log.system(&t, "b");
        log.system(&t, "c");
        let fresh: Vec<&str> = log.since(mark).map(|e| e.text.as_str()).collect();
        assert_eq!(fresh, ["b", "c"]);
    }
}

#[cfg(test)]
mod effects {
    use crate::{Effects, Vec2};

    #[test]
    fn particles_expire() {
        let mut fx = Effects::new();
        fx.spawn_heart(Vec2::new(1.0, 1.0));
        assert_eq!(fx.particles().len(), 1);
        for _ in 0..60 {
            fx.tick();
        }
        assert!(fx.particles().is_empty());
    }
}
