//! The grenade protocol: throw now, detonate at a later turn boundary.

mod common;

use combat_core::{Cell, Faction, Item, ItemKind, SquareGrid, StatKind, VisualRequest};
use runtime::ActionCatalog;

use common::{place, recorded_driver, soldier_at};

#[tokio::test]
async fn grenade_fires_exactly_once_two_boundaries_later() {
    let mut state = combat_core::CombatState::new();
    let bomber = place(
        &mut state,
        1,
        soldier_at(Cell::new(0, 0), Faction::Player)
            .with_equipped(Item::new("frag grenade", ItemKind::Grenade, 2, 15)),
    );
    let victim = place(&mut state, 2, soldier_at(Cell::new(5, 1), Faction::Enemy));
    let (mut driver, sink) = recorded_driver(state, SquareGrid::new(12, 12));
    let catalog = ActionCatalog::standard();

    driver
        .attempt_named(&catalog, "Frag Grenade", bomber, Cell::new(4, 0))
        .await
        .unwrap();

    // The throw happened now: grenade gone, cost charged, arc shown.
    let me = driver.state().actor(bomber).unwrap();
    assert!(me.equipped.is_none());
    assert_eq!(me.stats.current(StatKind::TimeUnits), 32);
    assert_eq!(me.stats.current(StatKind::Stamina), 24);
    assert!(sink
        .visuals()
        .iter()
        .any(|v| matches!(v, VisualRequest::ArcThrow { .. })));
    assert_eq!(driver.pending_detonations(), 1);

    let hp_before = driver
        .state()
        .actor(victim)
        .unwrap()
        .stats
        .current(StatKind::Health);
    assert_eq!(hp_before, 25);

    // First boundary: counting down, nothing fires.
    driver.begin_turn().await;
    assert_eq!(driver.pending_detonations(), 1);
    assert_eq!(
        driver
            .state()
            .actor(victim)
            .unwrap()
            .stats
            .current(StatKind::Health),
        25
    );

    // Second boundary: the charge goes off and leaves the registry.
    driver.begin_turn().await;
    assert_eq!(driver.pending_detonations(), 0);
    assert_eq!(
        driver
            .state()
            .actor(victim)
            .unwrap()
            .stats
            .current(StatKind::Health),
        10
    );
    assert_eq!(
        sink.visuals().last(),
        Some(&VisualRequest::Detonation {
            cell: Cell::new(4, 0),
            radius: 2,
        })
    );

    // Later boundaries are quiet: one armed charge, one blast.
    let visuals_after_blast = sink.visuals().len();
    driver.begin_turn().await;
    assert_eq!(sink.visuals().len(), visuals_after_blast);
    assert_eq!(
        driver
            .state()
            .actor(victim)
            .unwrap()
            .stats
            .current(StatKind::Health),
        10
    );
}

#[tokio::test]
async fn blast_is_faction_blind_within_its_radius() {
    let mut state = combat_core::CombatState::new();
    let bomber = place(
        &mut state,
        1,
        soldier_at(Cell::new(0, 0), Faction::Player)
            .with_equipped(Item::new("frag grenade", ItemKind::Grenade, 2, 15)),
    );
    let friend = place(&mut state, 2, soldier_at(Cell::new(5, 0), Faction::Player));
    let foe = place(&mut state, 3, soldier_at(Cell::new(3, 1), Faction::Enemy));
    let (mut driver, _sink) = recorded_driver(state, SquareGrid::new(12, 12));
    let catalog = ActionCatalog::standard();

    driver
        .attempt_named(&catalog, "Frag Grenade", bomber, Cell::new(4, 0))
        .await
        .unwrap();
    driver.begin_turn().await;
    driver.begin_turn().await;

    let hp = |id| {
        driver
            .state()
            .actor(id)
            .unwrap()
            .stats
            .current(StatKind::Health)
    };
    assert_eq!(hp(friend), 10);
    assert_eq!(hp(foe), 10);
    assert_eq!(hp(bomber), 25);
}
