//! The action system: definitions, execution trees and deferred effects.
//!
//! Flow: an [`ActionDefinition`] validates and prices an (actor, start,
//! target) triple; [`Action::from_definition`] turns an accepted triple
//! into a runnable [`Action`] tree; the turn driver walks the tree through
//! Setup, Execute and Complete; delayed effects outlive the tree as
//! [`PendingDetonation`] entries in the driver's registry.

pub mod definition;
pub mod delay;
pub mod error;
pub mod kinds;
pub mod tree;

pub use definition::{ActionCheck, ActionDefinition, ActionKind, ActionParams, AiChoice};
pub use delay::{DelayState, PendingDetonation};
pub use error::RefusalReason;
pub use tree::{Action, ActionBody, Phase, VisualRequest};
