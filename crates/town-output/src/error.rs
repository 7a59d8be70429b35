//! Failures while exporting the narrative log and daily snapshots.

use thiserror::Error;

/// Raised by an [`OutputWriter`](crate::OutputWriter) or a file-backed save
/// slot.  The simulation keeps running; `SimOutputObserver` holds on to the
/// first one for the caller.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("writing CSV row: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("town database: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
