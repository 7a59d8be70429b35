//! Behaviour-subsystem error type.
//!
//! Everything here is an internal invariant violation (a dangling id, an
//! impossible target).  Recoverable game situations such as "too expensive"
//! or "nobody to talk to" never produce an error.

use thiserror::Error;

use town_agent::AgentError;
use town_core::ObjectId;
use town_mobility::MobilityError;
use town_schedule::ScheduleError;
use town_world::WorldError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Mobility(#[from] MobilityError),

    #[error("object {0} cannot be used as an interaction target")]
    NotInteractable(ObjectId),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
