//! Deterministic behavior trees for turn-based AI.
//!
//! Every tick resolves immediately: nodes return [`Status::Success`] or
//! [`Status::Failure`], never a "running" state, because a turn-based
//! agent decides its whole move in one evaluation. Trees are immutable
//! once built and carry no per-tick scratch state; all mutation happens
//! on the caller-supplied context.
//!
//! Node vocabulary:
//! - [`Behavior`]: the node trait, generic over a context `C`
//! - [`Sequence`] / [`Selector`]: AND / OR flow control
//! - [`UtilitySelector`]: score-driven choice between subtrees
//! - [`Inverter`] / [`AlwaysSucceed`]: result decorators
//! - [`Condition`] / [`Act`]: closure leaves

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;

pub use behavior::{Behavior, Status};
pub use composite::{Selector, Sequence, UtilitySelector};
pub use decorator::{AlwaysSucceed, Inverter};
pub use leaf::{Act, Condition};
