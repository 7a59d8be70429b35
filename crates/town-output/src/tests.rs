//! Tests for town-output.

#[cfg(test)]
mod helpers {
    use town_core::{GameTime, SimConfig};
    use town_sim::{Sim, SimBuilder};

    pub fn tmp() -> tempfile::TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    /// Speed 60, one frame per minute, a minute before midnight.
    pub fn town(residents: usize) -> Sim {
        let config = SimConfig { initial_agents: residents, start_speed: 60, ..SimConfig::default() };
        let eve = GameTime { hour: 23, minute: 59, ..GameTime::default() };
        SimBuilder::new(config).start_time(eve).build().unwrap()
    }

    pub fn records(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::helpers::{records, tmp};
    use crate::csv::{CsvWriter, NARRATIVE_FILE, SNAPSHOT_FILE};
    use crate::row::{DailySnapshotRow, NarrativeRow};
    use crate::writer::OutputWriter;

    fn line(text: &str) -> NarrativeRow {
        NarrativeRow {
            time:     "Day 1 08:00".to_owned(),
            actor:    "Mina".to_owned(),
            category: "chat",
            kind:     "chat",
            text:     text.to_owned(),
        }
    }

    #[test]
    fn headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(NARRATIVE_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["time", "actor", "category", "kind", "text"]);

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["day", "agent_id", "name", "job", "money", "mood", "hunger", "energy", "fun", "social", "bladder", "hygiene"]
        );
    }

    #[test]
    fn text_with_commas_survives() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_narrative(&[line("Hi, how are you?"), line("Fine")]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join(NARRATIVE_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][4], "Hi, how are you?");
        assert_eq!(&rows[1][1], "Mina");
    }

    #[test]
    fn snapshot_values_are_rounded() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = DailySnapshotRow {
            day:      3,
            agent_id: 7,
            name:     "Mina".to_owned(),
            job:      "Waiter".to_owned(),
            money:    -20,
            mood:     55.55,
            needs:    [10.0, 20.0, 30.0, 40.0, 50.0, 60.04],
        };
        w.write_snapshots(&[row]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join(SNAPSHOT_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][4], "-20");
        assert_eq!(&rows[0][7], "20.0");
        assert_eq!(&rows[0][11], "60.0");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::helpers::{records, tmp, town};
    use crate::csv::{CsvWriter, NARRATIVE_FILE, SNAPSHOT_FILE};
    use crate::{DailySnapshotRow, NarrativeRow, OutputError, OutputResult, OutputWriter, SimOutputObserver};

    #[test]
    fn founding_lines_and_rollover_reach_the_files() {
        let dir = tmp();
        let mut sim = town(3);
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run_frames(1, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let narrative = records(&dir.path().join(NARRATIVE_FILE));
        let moved = narrative.iter().filter(|r| r[4].ends_with("moved into town.")).count();
        assert_eq!(moved, 3);
        assert!(narrative.iter().any(|r| &r[4] == "A new day has begun." && &r[1] == "system"));

        let snapshots = records(&dir.path().join(SNAPSHOT_FILE));
        assert_eq!(snapshots.len(), 3);
        assert!(snapshots.iter().all(|r| &r[0] == "2"));
    }

    #[test]
    fn nothing_is_written_twice() {
        let dir = tmp();
        let mut sim = town(2);
        let mut obs = SimOutputObserver::starting_after(CsvWriter::new(dir.path()).unwrap(), &sim.log);
        sim.log.system(&sim.clock.time, "first");
        sim.run_frames(1, &mut obs).unwrap();
        sim.log.system(&sim.clock.time, "second");
        sim.run_frames(1, &mut obs).unwrap();

        let narrative = records(&dir.path().join(NARRATIVE_FILE));
        assert!(narrative.iter().all(|r| !r[4].ends_with("moved into town.")));
        assert_eq!(narrative.iter().filter(|r| &r[4] == "first").count(), 1);
        assert_eq!(narrative.iter().filter(|r| &r[4] == "second").count(), 1);
        let first = narrative.iter().position(|r| &r[4] == "first").unwrap();
        let second = narrative.iter().position(|r| &r[4] == "second").unwrap();
        assert!(first < second);
    }

    struct Broken {
        calls: usize,
    }

    impl OutputWriter for Broken {
        fn write_narrative(&mut self, _rows: &[NarrativeRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.calls))))
        }

        fn write_snapshots(&mut self, _rows: &[DailySnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = town(1);
        let mut obs = SimOutputObserver::new(Broken { calls: 0 });
        sim.run_frames(1, &mut obs).unwrap();
        sim.log.system(&sim.clock.time, "more");
        sim.run_frames(1, &mut obs).unwrap();
        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("write 1"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 2);
    }
}

// ── JSON save file ────────────────────────────────────────────────────────────

#[cfg(test)]
mod file_store_tests {
    use super::helpers::tmp;
    use town_core::{GameTime, SimConfig};
    use town_sim::{NoopObserver, SaveStore, SimBuilder};
    use crate::JsonFileStore;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tmp();
        let mut store = JsonFileStore::new(dir.path().join("save.json"));
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn write_replaces_contents() {
        let dir = tmp();
        let mut store = JsonFileStore::new(dir.path().join("save.json"));
        store.write("one").unwrap();
        store.write("two").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("two"));
        assert!(!dir.path().join("save.tmp").exists());
    }

    #[test]
    fn unwritable_path_is_a_save_error() {
        let dir = tmp();
        let mut store = JsonFileStore::new(dir.path().join("no/such/dir/save.json"));
        assert!(store.write("x").is_err());
    }

    #[test]
    fn rollover_save_loads_into_a_new_town() {
        let dir = tmp();
        let path = dir.path().join("save.json");

        let config = SimConfig { initial_agents: 3, start_speed: 60, ..SimConfig::default() };
        let eve = GameTime { hour: 23, minute: 59, ..GameTime::default() };
        let mut sim = SimBuilder::new(config)
            .start_time(eve)
            .save_store(Box::new(JsonFileStore::new(&path)))
            .build()
            .unwrap();
        sim.frame(&mut NoopObserver).unwrap();
        assert!(path.exists());
        let names: Vec<String> = sim.store.iter().map(|a| a.name.clone()).collect();

        let mut other = SimBuilder::new(SimConfig { initial_agents: 5, ..SimConfig::default() })
            .save_store(Box::new(JsonFileStore::new(&path)))
            .build()
            .unwrap();
        assert!(other.load().unwrap());
        let restored: Vec<String> = other.store.iter().map(|a| a.name.clone()).collect();
        assert_eq!(restored, names);
        assert_eq!(other.clock.time.day, 2);
    }
}

// ── SQLite ────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use rusqlite::Connection;

    use super::helpers::{tmp, town};
    use town_sim::{SaveStore, SAVE_KEY};
    use crate::sqlite::DB_FILE;
    use crate::{SimOutputObserver, SqliteSaveStore, SqliteWriter};

    fn count(conn: &Connection, table: &str) -> i64 {
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0)).unwrap()
    }

    #[test]
    fn tables_fill_during_a_run() {
        let dir = tmp();
        let mut sim = town(2);
        let mut obs = SimOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
        sim.run_frames(3, &mut obs).unwrap();
        assert!(obs.take_error().is_none());
        drop(obs);

        let conn = Connection::open(dir.path().join(DB_FILE)).unwrap();
        assert_eq!(count(&conn, "daily_snapshots"), 2);
        assert!(count(&conn, "narrative_log") >= 3);
    }

    #[test]
    fn save_slot_holds_one_row() {
        let dir = tmp();
        let path = dir.path().join(DB_FILE);
        let mut store = SqliteSaveStore::open(&path).unwrap();
        assert!(store.read().unwrap().is_none());
        store.write("a").unwrap();
        store.write("b").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("b"));

        let conn = Connection::open(&path).unwrap();
        assert_eq!(count(&conn, "save_slot"), 1);
        let key: String = conn.query_row("SELECT key FROM save_slot", [], |r| r.get(0)).unwrap();
        assert_eq!(key, SAVE_KEY);
    }
}
