//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `narrative_log.csv`
//! - `daily_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::info;

use town_core::Need;

use crate::writer::OutputWriter;
use crate::{DailySnapshotRow, NarrativeRow, OutputResult};

pub const NARRATIVE_FILE: &str = "narrative_log.csv";
pub const SNAPSHOT_FILE: &str = "daily_snapshots.csv";

pub struct CsvWriter {
    narrative: Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create both files in `dir` (truncating old ones) and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut narrative = Writer::from_path(dir.join(NARRATIVE_FILE))?;
        narrative.write_record(["time", "actor", "category", "kind", "text"])?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        let mut header = vec!["day", "agent_id", "name", "job", "money", "mood"];
        header.extend(Need::ALL.iter().map(|n| n.as_str()));
        snapshots.write_record(&header)?;

        info!(dir = %dir.display(), "CSV output opened");
        Ok(Self { narrative, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_narrative(&mut self, rows: &[NarrativeRow]) -> OutputResult<()> {
        for row in rows {
            self.narrative.write_record([
                row.time.as_str(),
                row.actor.as_str(),
                row.category,
                row.kind,
                row.text.as_str(),
            ])?;
        }
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[DailySnapshotRow]) -> OutputResult<()> {
        for row in rows {
            let mut record = vec![
                row.day.to_string(),
                row.agent_id.to_string(),
                row.name.clone(),
                row.job.clone(),
                row.money.to_string(),
                format!("{:.1}", row.mood),
            ];
            record.extend(row.needs.iter().map(|v| format!("{v:.1}")));
            self.snapshots.write_record(&record)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.narrative.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
