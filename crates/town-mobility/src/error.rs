use thiserror::Error;
use town_core::AgentId;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("agent {agent} was sent to a non-finite point ({x}, {y})")]
    InvalidTarget { agent: AgentId, x: f32, y: f32 },
}

pub type MobilityResult<T> = Result<T, MobilityError>;
