//! Move and MoveStep validation and pricing.

use super::{rotation_cost, step_cost};
use crate::action::error::RefusalReason;
use crate::env::CombatEnv;
use crate::grid::{Cell, CompassDir};
use crate::state::CombatState;
use crate::stats::CostMap;

/// Prices a full walk from `start` to `target`: every step plus every
/// facing change along the way. Returns the accumulated cost and the
/// facing the actor ends up with.
pub fn move_costs(
    state: &CombatState,
    env: &CombatEnv<'_>,
    facing: CompassDir,
    start: Cell,
    target: Cell,
) -> Result<(CostMap, CompassDir), RefusalReason> {
    if start == target {
        return Err(RefusalReason::NoPath);
    }
    if !env.grid.is_walkable(target) {
        return Err(RefusalReason::Blocked);
    }
    if state.is_occupied(target) {
        return Err(RefusalReason::Occupied);
    }

    let path = env.paths.find_path(start, target);
    if path.is_empty() {
        return Err(RefusalReason::NoPath);
    }

    let mut costs = CostMap::new();
    let mut heading = facing;
    let mut prev = start;
    for &cell in &path {
        if state.is_occupied(cell) {
            return Err(RefusalReason::Occupied);
        }
        // Path cells are consecutive, so a direction always exists.
        let Some(dir) = CompassDir::between(prev, cell) else {
            return Err(RefusalReason::NoPath);
        };
        if dir != heading {
            costs.merge(&rotation_cost(heading, dir));
            heading = dir;
        }
        costs.merge(&step_cost(dir));
        prev = cell;
    }

    Ok((costs, heading))
}

/// Validates a full Move.
pub fn validate_move(
    state: &CombatState,
    env: &CombatEnv<'_>,
    facing: CompassDir,
    start: Cell,
    target: Cell,
) -> Result<CostMap, RefusalReason> {
    move_costs(state, env, facing, start, target).map(|(costs, _)| costs)
}

/// Validates a single step to an adjacent cell, including any turn needed
/// to face the travel direction first.
pub fn validate_move_step(
    state: &CombatState,
    env: &CombatEnv<'_>,
    facing: CompassDir,
    start: Cell,
    target: Cell,
) -> Result<CostMap, RefusalReason> {
    if !start.is_adjacent(target) {
        return Err(RefusalReason::OutOfRange);
    }
    if !env.grid.is_walkable(target) {
        return Err(RefusalReason::Blocked);
    }
    if state.is_occupied(target) {
        return Err(RefusalReason::Occupied);
    }

    let dir = CompassDir::between(start, target).ok_or(RefusalReason::NoPath)?;
    let mut costs = rotation_cost(facing, dir);
    costs.merge(&step_cost(dir));
    Ok(costs)
}
