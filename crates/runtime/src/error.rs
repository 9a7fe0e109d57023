//! Runtime-level errors.
//!
//! Validation refusals from the core surface here wrapped with the action
//! name, so callers can show "Strike refused: Can't afford stat costs"
//! without re-deriving context.

use combat_core::{ActorId, RefusalReason};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RuntimeError {
    #[error("unknown actor {0}")]
    UnknownActor(ActorId),

    #[error("no action named '{0}' in the catalog")]
    UnknownAction(String),

    #[error("{action} refused: {reason}")]
    Refused {
        action: String,
        reason: RefusalReason,
    },

    #[error("AI found no usable action for {0}")]
    NoAiAction(ActorId),

    #[error("catalog error: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
