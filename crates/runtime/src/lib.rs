//! Async host for the combat core.
//!
//! The core crate is pure and synchronous; this crate gives it a life:
//! a [`TurnDriver`] that owns the battle state and runs action trees, a
//! [`PresentationSink`] boundary where visual pacing happens, a behavior
//! tree brain for computer-controlled combatants and a RON-backed
//! [`ActionCatalog`] of definitions.

pub mod ai;
pub mod catalog;
pub mod driver;
pub mod error;
mod executor;
pub mod sink;

pub use ai::{AiTurnContext, PlannedAction, soldier_tree};
pub use catalog::ActionCatalog;
pub use driver::TurnDriver;
pub use error::{Result, RuntimeError};
pub use sink::{PresentationSink, SilentSink, TracingSink};
