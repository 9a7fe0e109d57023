//! Interact validation: walk up to a loose item and pick it up.

use super::{movement, nearest_approach, rotation_cost};
use crate::action::error::RefusalReason;
use crate::env::CombatEnv;
use crate::grid::{Cell, CompassDir};
use crate::state::CombatState;
use crate::stats::CostMap;

/// Fixed handling overhead for an interaction, on top of any movement and
/// rotation needed to reach the item.
pub fn interact_overhead() -> CostMap {
    CostMap::time_and_stamina(2, 1)
}

pub fn validate_interact(
    state: &CombatState,
    env: &CombatEnv<'_>,
    facing: CompassDir,
    start: Cell,
    target: Cell,
) -> Result<CostMap, RefusalReason> {
    if state.item_at(target).is_none() {
        return Err(RefusalReason::NothingToInteract);
    }

    let mut costs = CostMap::new();
    let (stand_cell, heading) = if start.is_adjacent(target) || start == target {
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
    costs.merge(&interact_overhead());
    Ok(costs)
}
