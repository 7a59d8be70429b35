use crate::{DailySnapshotRow, NarrativeRow, OutputResult};

/// Implemented by the CSV and SQLite writers.
///
/// [`SimOutputObserver`][crate::SimOutputObserver] stores the first error
/// instead of propagating it; fetch it with `take_error`.
pub trait OutputWriter {
    /// Append narrative entries, oldest first.
    fn write_narrative(&mut self, rows: &[NarrativeRow]) -> OutputResult<()>;

    /// Append one day's per-resident snapshot.
    fn write_snapshots(&mut self, rows: &[DailySnapshotRow]) -> OutputResult<()>;

    /// Flush everything.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
