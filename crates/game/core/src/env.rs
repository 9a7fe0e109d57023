//! Read-only environment handed to validation and setup.
//!
//! Bundles the layout and routing collaborators so call signatures stay
//! short. Mutable combat state is always passed separately, so a borrow of
//! the environment never blocks a state write.

use crate::grid::{GridOracle, Pathfinder};

/// Borrowed collaborator bundle.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    pub grid: &'a dyn GridOracle,
    pub paths: &'a dyn Pathfinder,
}

impl<'a> CombatEnv<'a> {
    pub fn new(grid: &'a dyn GridOracle, paths: &'a dyn Pathfinder) -> Self {
        Self { grid, paths }
    }
}
