//! Rotate and Rotate360 validation and pricing.

use super::rotation_cost;
use crate::action::error::RefusalReason;
use crate::env::CombatEnv;
use crate::grid::{Cell, CompassDir};
use crate::stats::CostMap;

/// Validates a turn toward `target`. Facing that way already is a legal
/// zero-cost action, not a refusal.
pub fn validate_rotate(
    facing: CompassDir,
    start: Cell,
    target: Cell,
) -> Result<CostMap, RefusalReason> {
    match CompassDir::between(start, target) {
        Some(dir) => Ok(rotation_cost(facing, dir)),
        // Self-targeted rotate: nothing to turn toward.
        None => Ok(CostMap::new()),
    }
}

/// Directions a full sweep from `start` will visit: every facing whose
/// neighbor cell exists on the grid, clockwise from North.
pub fn sweep_directions(env: &CombatEnv<'_>, start: Cell) -> Vec<CompassDir> {
    CompassDir::ALL
        .into_iter()
        .filter(|&dir| env.grid.cell_in_direction(start, dir).is_some())
        .collect()
}

/// Validates a 360-degree sweep: one 45-degree turn per direction that has
/// a neighbor cell. Edge cells sweep fewer directions and cost less.
pub fn validate_rotate360(env: &CombatEnv<'_>, start: Cell) -> Result<CostMap, RefusalReason> {
    let steps = sweep_directions(env, start).len() as i64;
    if steps == 0 {
        return Err(RefusalReason::NoTarget);
    }
    Ok(CostMap::time_and_stamina(steps, steps))
}
