//! Refusal reasons for action validation.
//!
//! Validation never panics and never propagates errors as control flow:
//! every failure is reported as `ok = false` plus one of these reasons,
//! with the cost map normalized to the rejected sentinel.

use crate::grid::Cell;

/// Why an action was refused during validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefusalReason {
    /// Acting actor does not exist in the combat state.
    #[error("Missing actor")]
    MissingActor,

    /// Actor exists but carries no stat ledger to charge.
    #[error("Actor has no stats")]
    MissingStats,

    /// A start or target cell is not on the battlefield.
    #[error("Cell ({},{}) is off the grid", cell.x, cell.y)]
    OffGrid { cell: Cell },

    /// No walkable route between start and target.
    #[error("No path to target")]
    NoPath,

    /// Target beyond the action's reach.
    #[error("Out of range")]
    OutOfRange,

    /// Target cell is impassable terrain.
    #[error("Target cell is blocked")]
    Blocked,

    /// Target cell is occupied by another actor.
    #[error("Target cell is occupied")]
    Occupied,

    /// Nothing at the target cell the action could affect.
    #[error("No valid target")]
    NoTarget,

    /// There is no item at the target cell to interact with.
    #[error("Nothing to interact with")]
    NothingToInteract,

    /// The action needs an equipped item of a specific kind.
    #[error("Required item is not equipped")]
    WrongItem,

    /// No free adjacent cell to act from.
    #[error("No adjacent cell to act from")]
    NoApproach,

    /// Validation succeeded but the ledger cannot pay.
    #[error("Can't afford stat costs")]
    CannotAfford,
}
