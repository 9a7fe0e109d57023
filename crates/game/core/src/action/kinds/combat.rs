//! Melee and ranged attack validation and pricing.
//!
//! Item-based attacks price a base rate per stat multiplied by the
//! equipped weapon's weight. Attacks that cannot be made from where the
//! actor stands fold a Move (priced through the movement rules) into the
//! cost, plus the rotation needed at the firing position.

use super::{movement, nearest_approach, rotation_cost};
use crate::action::error::RefusalReason;
use crate::env::CombatEnv;
use crate::grid::{Cell, CompassDir};
use crate::state::{ActorState, CombatState, ItemKind};
use crate::stats::CostMap;

/// Melee swing rate: 6 TU and 2 stamina per point of weapon weight.
pub fn melee_rate(weight: i64) -> CostMap {
    CostMap::time_and_stamina(6 * weight, 2 * weight)
}

/// Ranged shot rate: 4 TU and 2 stamina per point of weapon weight.
pub fn ranged_rate(weight: i64) -> CostMap {
    CostMap::time_and_stamina(4 * weight, 2 * weight)
}

pub fn validate_melee(
    state: &CombatState,
    env: &CombatEnv<'_>,
    actor: &ActorState,
    start: Cell,
    target: Cell,
) -> Result<CostMap, RefusalReason> {
    let weapon = actor
        .equipped_of_kind(ItemKind::MeleeWeapon)
        .ok_or(RefusalReason::WrongItem)?;
    let weight = weapon.weight;
    let facing = actor.facing;

    if state.actor_at(target).is_none() {
        return Err(RefusalReason::NoTarget);
    }

    let mut costs = CostMap::new();
    let (stand_cell, heading) = if start.is_adjacent(target) {
        (start, facing)
    } else {
        let approach = nearest_approach(state, env, start, target)?;
        let (move_costs, heading) = movement::move_costs(state, env, facing, start, approach)?;
        costs.merge(&move_costs);
        (approach, heading)
    };

    if let Some(dir) = CompassDir::between(stand_cell, target) {
        costs.merge(&rotation_cost(heading, dir));
    }
    costs.merge(&melee_rate(weight));
    Ok(costs)
}

pub fn validate_ranged(
    state: &CombatState,
    env: &CombatEnv<'_>,
    actor: &ActorState,
    start: Cell,
    target: Cell,
    range: u32,
) -> Result<CostMap, RefusalReason> {
    let weapon = actor
        .equipped_of_kind(ItemKind::RangedWeapon)
        .ok_or(RefusalReason::WrongItem)?;
    let weight = weapon.weight;
    let facing = actor.facing;

    if state.actor_at(target).is_none() {
        return Err(RefusalReason::NoTarget);
    }

    let mut costs = CostMap::new();
    let (stand_cell, heading) = if start.chebyshev(target) <= range {
        (start, facing)
    } else {
        let firing_cell = nearest_firing_cell(state, env, start, target, range)?;
        let (move_costs, heading) = movement::move_costs(state, env, facing, start, firing_cell)?;
        costs.merge(&move_costs);
        (firing_cell, heading)
    };

    if let Some(dir) = CompassDir::between(stand_cell, target) {
        costs.merge(&rotation_cost(heading, dir));
    }
    costs.merge(&ranged_rate(weight));
    Ok(costs)
}

/// Nearest walkable, unoccupied cell from which `target` is within `range`.
/// Same tie-breaking as approach selection: smallest squared distance to
/// `start`, first found wins.
pub(crate) fn nearest_firing_cell(
    state: &CombatState,
    env: &CombatEnv<'_>,
    start: Cell,
    target: Cell,
    range: u32,
) -> Result<Cell, RefusalReason> {
    let mut best: Option<(Cell, i64)> = None;
    for cell in env.grid.cells_in_range(target, range) {
        if cell == target || !env.grid.is_walkable(cell) || state.is_occupied(cell) {
            continue;
        }
        let dist = cell.distance_sq(start);
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((cell, dist));
        }
    }
    best.map(|(cell, _)| cell).ok_or(RefusalReason::OutOfRange)
}
