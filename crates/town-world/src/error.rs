//! World-catalog error type.

use thiserror::Error;

use town_core::ObjectId;

/// Errors produced by `town-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("object {0} not found in catalog")]
    ObjectNotFound(ObjectId),

    #[error("object {label:?} has a negative size ({w} x {h})")]
    InvalidRect { label: String, w: f32, h: f32 },

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
