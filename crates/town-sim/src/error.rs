use std::path::PathBuf;

use thiserror::Error;

use town_agent::AgentError;
use town_behavior::BehaviorError;
use town_world::WorldError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Save(#[from] SaveError),

    /// The frame failed and the clock was stopped.
    #[error("simulation halted: {0}")]
    Halted(String),
}

pub type SimResult<T> = Result<T, SimError>;

/// Failures of the save slot.  Never fatal to the simulation.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("save I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("save version {found} is not supported (expected {expected})")]
    Version { found: u32, expected: u32 },

    #[error("save backend error: {0}")]
    Backend(String),
}

pub type SaveResult<T> = Result<T, SaveError>;
