//! SQLite output backend and save slot (feature `sqlite`).
//!
//! Both live in `town.db` in the output directory:
//!
//! | Table             | Written by         |
//! |-------------------|--------------------|
//! | `narrative_log`   | [`SqliteWriter`]   |
//! | `daily_snapshots` | [`SqliteWriter`]   |
//! | `save_slot`       | [`SqliteSaveStore`]|

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use tracing::info;

use town_sim::{SAVE_KEY, SaveError, SaveResult, SaveStore};

use crate::writer::OutputWriter;
use crate::{DailySnapshotRow, NarrativeRow, OutputResult};

pub const DB_FILE: &str = "town.db";

pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `town.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(DB_FILE))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS narrative_log (
                 seq      INTEGER PRIMARY KEY AUTOINCREMENT,
                 time     TEXT NOT NULL,
                 actor    TEXT NOT NULL,
                 category TEXT NOT NULL,
                 kind     TEXT NOT NULL,
                 text     TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS daily_snapshots (
                 day      INTEGER NOT NULL,
                 agent_id INTEGER NOT NULL,
                 name     TEXT    NOT NULL,
                 job      TEXT    NOT NULL,
                 money    INTEGER NOT NULL,
                 mood     REAL    NOT NULL,
                 hunger   REAL    NOT NULL,
                 energy   REAL    NOT NULL,
                 fun      REAL    NOT NULL,
                 social   REAL    NOT NULL,
                 bladder  REAL    NOT NULL,
                 hygiene  REAL    NOT NULL,
                 PRIMARY KEY (day, agent_id)
             );",
        )?;

        info!(path = %dir.join(DB_FILE).display(), "SQLite output opened");
        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_narrative(&mut self, rows: &[NarrativeRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO narrative_log (time, actor, category, kind, text) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.time, row.actor, row.category, row.kind, row.text])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[DailySnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO daily_snapshots \
                 (day, agent_id, name, job, money, mood, hunger, energy, fun, social, bladder, hygiene) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for row in rows {
                let [hunger, energy, fun, social, bladder, hygiene] = row.needs;
                stmt.execute(rusqlite::params![
                    row.day,
                    row.agent_id,
                    row.name,
                    row.job,
                    row.money,
                    row.mood,
                    hunger,
                    energy,
                    fun,
                    social,
                    bladder,
                    hygiene,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

// ── Save slot ─────────────────────────────────────────────────────────────────

/// Key-value save slot: one row keyed by [`SAVE_KEY`].
pub struct SqliteSaveStore {
    conn: Connection,
}

impl SqliteSaveStore {
    pub fn open(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS save_slot (
                 key   TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )?;
        Ok(Self { conn })
    }
}

fn backend(e: rusqlite::Error) -> SaveError {
    SaveError::Backend(e.to_string())
}

impl SaveStore for SqliteSaveStore {
    fn write(&mut self, blob: &str) -> SaveResult<()> {
        self.conn
            .execute(
                "INSERT INTO save_slot (key, value) VALUES (?1, ?2) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![SAVE_KEY, blob],
            )
            .map_err(backend)?;
        Ok(())
    }

    fn read(&mut self) -> SaveResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM save_slot WHERE key = ?1", [SAVE_KEY], |r| r.get(0))
            .optional()
            .map_err(backend)
    }
}
