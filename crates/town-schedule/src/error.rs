use thiserror::Error;

use town_core::JobId;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("job parse error: {0}")]
    Parse(String),

    #[error("duplicate job key {0:?}")]
    DuplicateJob(String),

    #[error("job {key:?} has an empty or inverted shift {start}..{end}")]
    InvalidShift { key: String, start: u8, end: u8 },

    #[error("job {0} not found in registry")]
    JobNotFound(JobId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
