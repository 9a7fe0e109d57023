//! Throw and Explode validation and pricing.
//!
//! Explode is the grenade composite: its validation is exactly the throw
//! that delivers the charge; the detonation itself is deferred across
//! turns and priced at zero.

use super::rotation_cost;
use crate::action::error::RefusalReason;
use crate::env::CombatEnv;
use crate::grid::{Cell, CompassDir};
use crate::state::{ActorState, ItemKind};
use crate::stats::CostMap;

/// Throw rate: 3 TU and 2 stamina per point of grenade weight.
pub fn throw_rate(weight: i64) -> CostMap {
    CostMap::time_and_stamina(3 * weight, 2 * weight)
}

pub fn validate_throw(
    env: &CombatEnv<'_>,
    actor: &ActorState,
    start: Cell,
    target: Cell,
    range: u32,
) -> Result<CostMap, RefusalReason> {
    let grenade = actor
        .equipped_of_kind(ItemKind::Grenade)
        .ok_or(RefusalReason::WrongItem)?;

    if start.chebyshev(target) > range {
        return Err(RefusalReason::OutOfRange);
    }
    if env.paths.arc_path(start, target).is_none() {
        return Err(RefusalReason::NoPath);
    }

    let mut costs = CostMap::new();
    if let Some(dir) = CompassDir::between(start, target) {
        costs.merge(&rotation_cost(actor.facing, dir));
    }
    costs.merge(&throw_rate(grenade.weight));
    Ok(costs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SquareGrid;
    use crate::state::{Faction, Item};
    use crate::stats::{StatKind, StatSheet};

    fn bomber() -> ActorState {
        ActorState::new(
            Cell::new(0, 0),
            CompassDir::North,
            Faction::Player,
            StatSheet::soldier(40, 30, 25),
        )
        .with_equipped(Item::new("frag grenade", ItemKind::Grenade, 2, 15))
    }

    #[test]
    fn throw_prices_rotation_plus_weight_rate() {
        let grid = SquareGrid::new(10, 10);
        let env = CombatEnv::new(&grid, &grid);

        // Facing North, lobbing due East: 2 rotate steps + 2-weight rate.
        let costs = validate_throw(&env, &bomber(), Cell::new(0, 0), Cell::new(4, 0), 6).unwrap();
        assert_eq!(costs.get(StatKind::TimeUnits), 2 + 6);
        assert_eq!(costs.get(StatKind::Stamina), 2 + 4);
    }

    #[test]
    fn throw_needs_a_grenade_in_hand() {
        let grid = SquareGrid::new(10, 10);
        let env = CombatEnv::new(&grid, &grid);
        let mut actor = bomber();
        actor.equipped = Some(Item::new("rifle", ItemKind::RangedWeapon, 3, 12));

        let err =
            validate_throw(&env, &actor, Cell::new(0, 0), Cell::new(4, 0), 6).unwrap_err();
        assert_eq!(err, RefusalReason::WrongItem);
    }

    #[test]
    fn throw_respects_range() {
        let grid = SquareGrid::new(20, 20);
        let env = CombatEnv::new(&grid, &grid);
        let err =
            validate_throw(&env, &bomber(), Cell::new(0, 0), Cell::new(9, 0), 6).unwrap_err();
        assert_eq!(err, RefusalReason::OutOfRange);
    }
}
