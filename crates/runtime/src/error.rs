//! Errors surfaced by the AI turn driver.
use thiserror::Error;

use waves_core::{ActorId, StateError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("actor {0} does not exist")]
    UnknownActor(ActorId),

    #[error("actor {0} is not an AI controlled ship")]
    NotAnAiShip(ActorId),

    #[error("actor {0} is no longer on the grid")]
    NotPlaced(ActorId),

    #[error(transparent)]
    State(#[from] StateError),
}
