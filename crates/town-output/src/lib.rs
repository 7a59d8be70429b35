//! `town-output` — narrative logs, daily snapshots and save slots.
//!
//! | Feature   | Backend | Files created                                          |
//! |-----------|---------|--------------------------------------------------------|
//! | *(none)*  | CSV     | `narrative_log.csv`, `daily_snapshots.csv`             |
//! | *(none)*  | JSON    | one save file, via [`JsonFileStore`]                   |
//! | `sqlite`  | SQLite  | `town.db` (both tables plus a key-value save slot)     |
//!
//! The writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `town_sim::SimObserver`.  The save
//! slots implement `town_sim::SaveStore` and are handed to the `SimBuilder`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use town_output::{CsvWriter, JsonFileStore, SimOutputObserver};
//!
//! let mut sim = SimBuilder::new(config)
//!     .save_store(Box::new(JsonFileStore::new(dir.join("save.json"))))
//!     .build()?;
//! sim.load()?;
//!
//! let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);
//! sim.run_frames(10_000, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod file_store;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use file_store::JsonFileStore;
pub use observer::SimOutputObserver;
pub use row::{DailySnapshotRow, NarrativeRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::{SqliteSaveStore, SqliteWriter};
