//! AI turns end to end: plan with the behavior tree, spend with the driver.

mod common;

use combat_core::{ActorState, Cell, CompassDir, Faction, Item, ItemKind, SquareGrid, Stat, StatKind, StatSheet};
use runtime::ActionCatalog;

use common::{place, recorded_driver, soldier_at};

#[tokio::test]
async fn rifleman_shoots_until_the_ledger_runs_dry() {
    let mut state = combat_core::CombatState::new();
    let mut rifleman = ActorState::new(
        Cell::new(2, 2),
        CompassDir::North,
        Faction::Enemy,
        StatSheet::soldier(20, 20, 25),
    );
    rifleman.equipped = Some(Item::new("rifle", ItemKind::RangedWeapon, 2, 12));
    let shooter = place(&mut state, 1, rifleman);
    let target = place(&mut state, 2, soldier_at(Cell::new(2, 6), Faction::Player));
    let (mut driver, _sink) = recorded_driver(state, SquareGrid::new(12, 12));
    let catalog = ActionCatalog::standard();

    let taken = driver.take_ai_turn(shooter, &catalog, 10).await.unwrap();

    // Each shot is 8 TU / 4 stamina (weight-2 rifle, no rotation needed).
    // 20 TU covers two; the third plan fails affordability and, with only
    // 4 TU left, so does every fallback.
    assert_eq!(taken, 2);
    let me = driver.state().actor(shooter).unwrap();
    assert_eq!(me.stats.current(StatKind::TimeUnits), 4);
    assert_eq!(me.stats.current(StatKind::Stamina), 12);
    assert_eq!(
        driver
            .state()
            .actor(target)
            .unwrap()
            .stats
            .current(StatKind::Health),
        1
    );
}

#[tokio::test]
async fn idle_soldier_sweeps_for_threats() {
    let mut state = combat_core::CombatState::new();
    let mut scout = soldier_at(Cell::new(5, 5), Faction::Enemy);
    scout.stats.set(StatKind::TimeUnits, Stat::new(0, 10));
    scout.stats.set(StatKind::Stamina, Stat::new(0, 10));
    let scout = place(&mut state, 1, scout);
    let (mut driver, _sink) = recorded_driver(state, SquareGrid::new(12, 12));
    let catalog = ActionCatalog::standard();

    // Nobody to fight, nothing to grab: one full sweep (8 TU / 8 stamina)
    // fits the budget, a second does not.
    let taken = driver.take_ai_turn(scout, &catalog, 10).await.unwrap();
    assert_eq!(taken, 1);
    let me = driver.state().actor(scout).unwrap();
    assert_eq!(me.stats.current(StatKind::TimeUnits), 2);
}

#[tokio::test]
async fn ai_turn_for_a_missing_actor_is_an_error() {
    let state = combat_core::CombatState::new();
    let (mut driver, _sink) = recorded_driver(state, SquareGrid::new(8, 8));
    let catalog = ActionCatalog::standard();

    assert!(driver
        .take_ai_turn(combat_core::ActorId(9), &catalog, 5)
        .await
        .is_err());
}

#[tokio::test]
async fn tick_budget_caps_the_number_of_actions() {
    let mut state = combat_core::CombatState::new();
    let mut rifleman = ActorState::new(
        Cell::new(2, 2),
        CompassDir::North,
        Faction::Enemy,
        StatSheet::soldier(80, 60, 25),
    );
    rifleman.equipped = Some(Item::new("rifle", ItemKind::RangedWeapon, 2, 12));
    let shooter = place(&mut state, 1, rifleman);
    place(&mut state, 2, soldier_at(Cell::new(2, 6), Faction::Player));
    let (mut driver, _sink) = recorded_driver(state, SquareGrid::new(12, 12));
    let catalog = ActionCatalog::standard();

    // Plenty of TU for more, but the budget stops the turn first.
    let taken = driver.take_ai_turn(shooter, &catalog, 1).await.unwrap();
    assert_eq!(taken, 1);
    assert_eq!(
        driver
            .state()
            .actor(shooter)
            .unwrap()
            .stats
            .current(StatKind::TimeUnits),
        72
    );
}
