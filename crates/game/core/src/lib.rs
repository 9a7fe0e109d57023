//! Deterministic turn-based combat core.
//!
//! Pure rules: grid geometry, stat ledgers, action validation and the
//! composite action execution tree. The crate owns no I/O, no clock and
//! no async runtime; visual pacing and turn orchestration live in the
//! runtime crate, which drives this one through plain function calls.
//!
//! Everything here is deterministic over (state, environment, inputs), so
//! validation can be replayed anywhere and always prices identically.

pub mod action;
pub mod env;
pub mod grid;
pub mod state;
pub mod stats;

pub use action::{
    Action, ActionBody, ActionCheck, ActionDefinition, ActionKind, ActionParams, AiChoice,
    DelayState, PendingDetonation, Phase, RefusalReason, VisualRequest,
};
pub use env::CombatEnv;
pub use grid::{ArcPath, Cell, CompassDir, GridOracle, Pathfinder, SquareGrid};
pub use state::{ActorId, ActorState, CombatState, Faction, Item, ItemKind};
pub use stats::{CostMap, Stat, StatKind, StatSheet};
