//! Per-kind validation and cost logic.
//!
//! Each action kind is a small module of free functions; the shared
//! [`ActionDefinition`](crate::action::ActionDefinition) dispatches on its
//! kind tag. Cost rules that apply uniformly across kinds (rotation steps,
//! step pricing, approach selection) live here.

pub mod combat;
pub mod interact;
pub mod movement;
pub mod rotation;
pub mod throwing;

use crate::action::error::RefusalReason;
use crate::env::CombatEnv;
use crate::grid::{Cell, CompassDir};
use crate::state::CombatState;
use crate::stats::CostMap;

/// Rotation price: 1 time unit + 1 stamina per 45-degree step.
pub fn rotation_cost(from: CompassDir, to: CompassDir) -> CostMap {
    let steps = i64::from(from.steps_to(to));
    CostMap::time_and_stamina(steps, steps)
}

/// Step price: diagonal steps cost more time than orthogonal ones.
pub fn step_cost(dir: CompassDir) -> CostMap {
    if dir.is_diagonal() {
        CostMap::time_and_stamina(6, 2)
    } else {
        CostMap::time_and_stamina(4, 2)
    }
}

/// Nearest walkable, unoccupied cell adjacent to `target`.
///
/// Ties break by smallest squared distance to `start`; among equals the
/// first cell in clockwise neighbor order wins.
pub fn nearest_approach(
    state: &CombatState,
    env: &CombatEnv<'_>,
    start: Cell,
    target: Cell,
) -> Result<Cell, RefusalReason> {
    let mut best: Option<(Cell, i64)> = None;
    for cell in env.grid.neighbors(target, true) {
        if !env.grid.is_walkable(cell) || state.is_occupied(cell) {
            continue;
        }
        let dist = cell.distance_sq(start);
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((cell, dist));
        }
    }
    best.map(|(cell, _)| cell).ok_or(RefusalReason::NoApproach)
}
