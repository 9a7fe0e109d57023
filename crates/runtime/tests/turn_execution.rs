//! End-to-end action execution through the turn driver.

mod common;

use combat_core::{
    Cell, CompassDir, Faction, Item, ItemKind, SquareGrid, StatKind, VisualRequest,
};
use runtime::{ActionCatalog, RuntimeError};

use common::{place, recorded_driver, soldier_at};

#[tokio::test]
async fn diagonal_move_rotates_then_steps() {
    let mut state = combat_core::CombatState::new();
    let actor = place(&mut state, 1, soldier_at(Cell::new(0, 0), Faction::Player));
    let (mut driver, sink) = recorded_driver(state, SquareGrid::new(10, 10));
    let catalog = ActionCatalog::standard();

    driver
        .attempt_named(&catalog, "Move", actor, Cell::new(1, 1))
        .await
        .unwrap();

    // One 45-degree turn (1 TU, 1 stamina) plus one diagonal step
    // (6 TU, 2 stamina), charged as a single aggregate.
    let me = driver.state().actor(actor).unwrap();
    assert_eq!(me.cell, Cell::new(1, 1));
    assert_eq!(me.facing, CompassDir::NorthEast);
    assert_eq!(me.stats.current(StatKind::TimeUnits), 33);
    assert_eq!(me.stats.current(StatKind::Stamina), 27);

    assert_eq!(
        sink.visuals(),
        vec![
            VisualRequest::Rotate {
                actor,
                from: CompassDir::North,
                to: CompassDir::NorthEast,
            },
            VisualRequest::MoveStep {
                actor,
                from: Cell::new(0, 0),
                to: Cell::new(1, 1),
            },
        ]
    );
}

#[tokio::test]
async fn multi_step_move_presents_steps_in_path_order() {
    let mut state = combat_core::CombatState::new();
    let actor = place(&mut state, 1, soldier_at(Cell::new(0, 0), Faction::Player));
    let (mut driver, sink) = recorded_driver(state, SquareGrid::new(10, 10));
    let catalog = ActionCatalog::standard();

    driver
        .attempt_named(&catalog, "Move", actor, Cell::new(3, 0))
        .await
        .unwrap();

    // The first step turns the walker East; later steps reuse the facing.
    let visuals = sink.visuals();
    assert_eq!(visuals.len(), 4);
    assert!(matches!(visuals[0], VisualRequest::Rotate { .. }));
    for (i, visual) in visuals[1..].iter().enumerate() {
        let x = i as i32;
        assert_eq!(
            *visual,
            VisualRequest::MoveStep {
                actor,
                from: Cell::new(x, 0),
                to: Cell::new(x + 1, 0),
            }
        );
    }
    assert_eq!(driver.state().actor(actor).unwrap().cell, Cell::new(3, 0));
}

#[tokio::test]
async fn broke_actor_is_refused_without_side_effects() {
    let mut state = combat_core::CombatState::new();
    let actor = place(&mut state, 1, soldier_at(Cell::new(0, 0), Faction::Player));
    state
        .actor_mut(actor)
        .unwrap()
        .stats
        .stat_mut(StatKind::TimeUnits)
        .unwrap()
        .remove_value(999);
    let (mut driver, sink) = recorded_driver(state, SquareGrid::new(10, 10));
    let catalog = ActionCatalog::standard();

    let err = driver
        .attempt_named(&catalog, "Move", actor, Cell::new(1, 1))
        .await
        .unwrap_err();

    assert!(matches!(err, RuntimeError::Refused { .. }));
    assert_eq!(err.to_string(), "Move refused: Can't afford stat costs");

    // Nothing moved, nothing shown, nothing charged.
    let me = driver.state().actor(actor).unwrap();
    assert_eq!(me.cell, Cell::new(0, 0));
    assert_eq!(me.stats.current(StatKind::Stamina), 30);
    assert!(sink.visuals().is_empty());
}

#[tokio::test]
async fn distant_melee_walks_in_before_striking() {
    let mut state = combat_core::CombatState::new();
    let attacker = place(
        &mut state,
        1,
        soldier_at(Cell::new(0, 0), Faction::Player)
            .with_equipped(Item::new("combat knife", ItemKind::MeleeWeapon, 1, 8)),
    );
    let victim = place(&mut state, 2, soldier_at(Cell::new(3, 0), Faction::Enemy));
    let (mut driver, sink) = recorded_driver(state, SquareGrid::new(10, 10));
    let catalog = ActionCatalog::standard();

    driver
        .attempt_named(&catalog, "Strike", attacker, Cell::new(3, 0))
        .await
        .unwrap();

    // Approach to (2,0): turn East + two orthogonal steps. Strike rate for
    // a weight-1 blade: 6 TU, 2 stamina. One aggregate charge of 16/8.
    let me = driver.state().actor(attacker).unwrap();
    assert_eq!(me.cell, Cell::new(2, 0));
    assert_eq!(me.stats.current(StatKind::TimeUnits), 24);
    assert_eq!(me.stats.current(StatKind::Stamina), 22);

    let hp = driver
        .state()
        .actor(victim)
        .unwrap()
        .stats
        .current(StatKind::Health);
    assert_eq!(hp, 17);

    // The strike visual comes last, after the walk-in.
    let visuals = sink.visuals();
    assert_eq!(
        visuals.last(),
        Some(&VisualRequest::Strike {
            actor: attacker,
            target: Cell::new(3, 0),
        })
    );
}

#[tokio::test]
async fn pick_up_moves_loot_into_the_inventory() {
    let mut state = combat_core::CombatState::new();
    let actor = place(&mut state, 1, soldier_at(Cell::new(0, 0), Faction::Player));
    state.place_item(Cell::new(1, 0), Item::new("medkit", ItemKind::Loot, 1, 0));
    let (mut driver, _sink) = recorded_driver(state, SquareGrid::new(10, 10));
    let catalog = ActionCatalog::standard();

    driver
        .attempt_named(&catalog, "Pick Up", actor, Cell::new(1, 0))
        .await
        .unwrap();

    let me = driver.state().actor(actor).unwrap();
    assert_eq!(me.inventory.len(), 1);
    assert_eq!(me.inventory[0].name, "medkit");
    assert!(driver.state().item_at(Cell::new(1, 0)).is_none());
    // Adjacent pickup: turn East (2) + overhead (2 TU, 1 stamina).
    assert_eq!(me.stats.current(StatKind::TimeUnits), 36);
    assert_eq!(me.stats.current(StatKind::Stamina), 27);
}

#[tokio::test]
async fn look_around_sweeps_every_available_direction() {
    let mut state = combat_core::CombatState::new();
    let actor = place(&mut state, 1, soldier_at(Cell::new(5, 5), Faction::Player));
    let (mut driver, sink) = recorded_driver(state, SquareGrid::new(10, 10));
    let catalog = ActionCatalog::standard();

    driver
        .attempt_named(&catalog, "Look Around", actor, Cell::new(5, 5))
        .await
        .unwrap();

    // Interior cell: 8 sweep directions, 7 of them actual facing changes
    // (the sweep starts on the current facing).
    let rotations = sink
        .visuals()
        .iter()
        .filter(|v| matches!(v, VisualRequest::Rotate { .. }))
        .count();
    assert_eq!(rotations, 7);

    let me = driver.state().actor(actor).unwrap();
    assert_eq!(me.stats.current(StatKind::TimeUnits), 32);
    assert_eq!(me.stats.current(StatKind::Stamina), 22);
}
