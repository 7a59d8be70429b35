//! Agent-subsystem error type.

use thiserror::Error;

use town_core::AgentId;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent {0} not found in store")]
    UnknownAgent(AgentId),

    #[error("agent {0} is already in the store")]
    DuplicateAgent(AgentId),

    #[error("personality parse error: {0}")]
    Parse(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
