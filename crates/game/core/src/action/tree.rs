//! Action instances: one-shot execution units with a composite tree.
//!
//! An [`Action`] binds a definition to one (actor, start, target) triple
//! and a pre-computed cost, then runs a three-phase lifecycle:
//! Setup -> Execute -> Complete. Setup may populate an ordered list of
//! child actions; the turn driver runs the tree in strict pre-order, each
//! child finishing all three phases (including its own descendants)
//! before the next sibling starts, and all children before the parent's
//! own effect.
//!
//! Phases that find nothing to do (target gone, cell blocked since
//! validation) degrade to logged no-ops. The tree still completes and the
//! committed cost is still deducted; a stalled turn is worse than a
//! partially-ineffective action.

use crate::action::definition::{ActionDefinition, ActionKind};
use crate::action::delay::{DelayState, PendingDetonation};
use crate::env::CombatEnv;
use crate::grid::{ArcPath, Cell, CompassDir};
use crate::state::{ActorId, CombatState, ItemKind};
use crate::stats::CostMap;

// ============================================================================
// Body
// ============================================================================

/// Kind tag plus the execution payload resolved at instantiation.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionBody {
    Move { path: Vec<Cell> },
    MoveStep { dir: CompassDir },
    Rotate { to_dir: CompassDir },
    Rotate360,
    Interact,
    MeleeAttack { damage: i64 },
    RangedAttack { damage: i64, range: u32 },
    Throw { arc: Option<ArcPath> },
    Explode { radius: u32, damage: i64, delay_turns: u32 },
}

impl ActionBody {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionBody::Move { .. } => ActionKind::Move,
            ActionBody::MoveStep { .. } => ActionKind::MoveStep,
            ActionBody::Rotate { .. } => ActionKind::Rotate,
            ActionBody::Rotate360 => ActionKind::Rotate360,
            ActionBody::Interact => ActionKind::Interact,
            ActionBody::MeleeAttack { .. } => ActionKind::MeleeAttack,
            ActionBody::RangedAttack { .. } => ActionKind::RangedAttack,
            ActionBody::Throw { .. } => ActionKind::Throw,
            ActionBody::Explode { .. } => ActionKind::Explode,
        }
    }
}

// ============================================================================
// Visuals
// ============================================================================

/// A presentation step the driver awaits as a logical barrier before the
/// action completes. The core never depends on wall-clock timing.
#[derive(Clone, Debug, PartialEq)]
pub enum VisualRequest {
    MoveStep { actor: ActorId, from: Cell, to: Cell },
    Rotate { actor: ActorId, from: CompassDir, to: CompassDir },
    Strike { actor: ActorId, target: Cell },
    Projectile { actor: ActorId, from: Cell, to: Cell },
    ArcThrow { actor: ActorId, arc: ArcPath },
    Detonation { cell: Cell, radius: u32 },
}

/// Lifecycle marker, mostly for debugging and driver assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Created,
    SetUp,
    Executed,
    Completed,
}

// ============================================================================
// Action
// ============================================================================

/// A one-shot executable bound to an actor, start cell and target cell.
#[derive(Clone, Debug)]
pub struct Action {
    body: ActionBody,
    pub actor: ActorId,
    pub start: Cell,
    pub target: Cell,
    pub costs: CostMap,
    pub children: Vec<Action>,
    phase: Phase,
    delay: Option<DelayState>,
}

impl Action {
    pub fn new(body: ActionBody, actor: ActorId, start: Cell, target: Cell, costs: CostMap) -> Self {
        Self {
            body,
            actor,
            start,
            target,
            costs,
            children: Vec::new(),
            phase: Phase::Created,
            delay: None,
        }
    }

    /// A zero-cost sub-action. The parent charges the aggregate cost, so
    /// children must not deduct anything of their own.
    fn child(body: ActionBody, actor: ActorId, start: Cell, target: Cell) -> Self {
        Self::new(body, actor, start, target, CostMap::new())
    }

    /// Builds a validated root action from a definition. `None` when
    /// validation refuses the triple.
    pub fn from_definition(
        def: &ActionDefinition,
        state: &CombatState,
        env: &CombatEnv<'_>,
        actor: ActorId,
        start: Cell,
        target: Cell,
    ) -> Option<Action> {
        let check = def.can_take_action(state, env, actor, start, target);
        if !check.ok {
            tracing::debug!(
                action = %def.kind,
                %actor,
                reason = ?check.reason,
                "action refused at instantiation"
            );
            return None;
        }

        let me = state.actor(actor)?;
        let body = match def.kind {
            ActionKind::Move => ActionBody::Move { path: Vec::new() },
            ActionKind::MoveStep => ActionBody::MoveStep {
                dir: CompassDir::between(start, target)?,
            },
            ActionKind::Rotate => ActionBody::Rotate {
                to_dir: CompassDir::between(start, target).unwrap_or(me.facing),
            },
            ActionKind::Rotate360 => ActionBody::Rotate360,
            ActionKind::Interact => ActionBody::Interact,
            ActionKind::MeleeAttack => ActionBody::MeleeAttack {
                damage: me
                    .equipped_of_kind(ItemKind::MeleeWeapon)
                    .map_or(0, |w| w.damage)
                    + def.params.bonus_damage,
            },
            ActionKind::RangedAttack => ActionBody::RangedAttack {
                damage: me
                    .equipped_of_kind(ItemKind::RangedWeapon)
                    .map_or(0, |w| w.damage)
                    + def.params.bonus_damage,
                range: def.params.range,
            },
            ActionKind::Throw => ActionBody::Throw { arc: None },
            ActionKind::Explode => ActionBody::Explode {
                radius: def.params.explosion_radius,
                damage: me
                    .equipped_of_kind(ItemKind::Grenade)
                    .map_or(0, |g| g.damage)
                    + def.params.bonus_damage,
                delay_turns: def.params.turns_until_explode,
            },
        };

        Some(Action::new(body, actor, start, target, check.costs))
    }

    pub fn kind(&self) -> ActionKind {
        self.body.kind()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    // ------------------------------------------------------------------
    // Phase 1: Setup
    // ------------------------------------------------------------------

    /// Kind-specific decomposition into child actions.
    ///
    /// Idempotent: any previously populated child list is cleared first,
    /// so re-running setup never accumulates duplicates.
    pub fn setup(&mut self, state: &CombatState, env: &CombatEnv<'_>) {
        self.children.clear();
        self.phase = Phase::SetUp;

        let actor = self.actor;
        let (start, target) = (self.start, self.target);

        match &mut self.body {
            ActionBody::Move { path } => {
                *path = env.paths.find_path(start, target);
                if path.is_empty() {
                    tracing::warn!(%actor, ?start, ?target, "move has no path; degrading to no-op");
                    return;
                }
                let mut prev = start;
                for &cell in path.iter() {
                    if let Some(dir) = CompassDir::between(prev, cell) {
                        self.children
                            .push(Action::child(ActionBody::MoveStep { dir }, actor, prev, cell));
                    }
                    prev = cell;
                }
            }
            ActionBody::MoveStep { dir } => {
                let dir = *dir;
                let facing = state.actor(actor).map(|a| a.facing);
                if facing.is_some_and(|f| f != dir) {
                    self.children.push(Action::child(
                        ActionBody::Rotate { to_dir: dir },
                        actor,
                        start,
                        start,
                    ));
                }
            }
            ActionBody::Rotate { .. } => {}
            ActionBody::Rotate360 => {
                // One 45-degree turn per direction that has a neighbor
                // cell; irregular map edges sweep fewer directions.
                for dir in crate::action::kinds::rotation::sweep_directions(env, start) {
                    self.children.push(Action::child(
                        ActionBody::Rotate { to_dir: dir },
                        actor,
                        start,
                        start,
                    ));
                }
            }
            ActionBody::Interact | ActionBody::MeleeAttack { .. } => {
                let stand = if start.is_adjacent(target) || start == target {
                    start
                } else {
                    match crate::action::kinds::nearest_approach(state, env, start, target) {
                        Ok(approach) => {
                            self.children.push(Action::child(
                                ActionBody::Move { path: Vec::new() },
                                actor,
                                start,
                                approach,
                            ));
                            approach
                        }
                        Err(_) => {
                            tracing::warn!(%actor, ?target, "no approach cell; degrading to no-op");
                            start
                        }
                    }
                };
                if let Some(dir) = CompassDir::between(stand, target) {
                    self.children.push(Action::child(
                        ActionBody::Rotate { to_dir: dir },
                        actor,
                        stand,
                        stand,
                    ));
                }
            }
            ActionBody::RangedAttack { range, .. } => {
                let range = *range;
                let stand = if start.chebyshev(target) <= range {
                    start
                } else {
                    match crate::action::kinds::combat::nearest_firing_cell(
                        state, env, start, target, range,
                    ) {
                        Ok(cell) => {
                            self.children.push(Action::child(
                                ActionBody::Move { path: Vec::new() },
                                actor,
                                start,
                                cell,
                            ));
                            cell
                        }
                        Err(_) => {
                            tracing::warn!(%actor, ?target, "no firing cell; degrading to no-op");
                            start
                        }
                    }
                };
                if let Some(dir) = CompassDir::between(stand, target) {
                    self.children.push(Action::child(
                        ActionBody::Rotate { to_dir: dir },
                        actor,
                        stand,
                        stand,
                    ));
                }
            }
            ActionBody::Throw { arc } => {
                *arc = env.paths.arc_path(start, target);
                let facing = state.actor(actor).map(|a| a.facing);
                if let Some(dir) = CompassDir::between(start, target) {
                    if facing.is_some_and(|f| f != dir) {
                        self.children.push(Action::child(
                            ActionBody::Rotate { to_dir: dir },
                            actor,
                            start,
                            start,
                        ));
                    }
                }
            }
            ActionBody::Explode { .. } => {
                self.children.push(Action::child(
                    ActionBody::Throw { arc: None },
                    actor,
                    start,
                    target,
                ));
            }
        }
    }

    // ------------------------------------------------------------------
    // Phase 2: Execute
    // ------------------------------------------------------------------

    /// Applies this node's own terminal effect to the combat state and
    /// returns the visual step the driver should await.
    ///
    /// Target invalidation (actor gone, cell blocked since validation) is
    /// tolerated as a logged no-op, never an error.
    pub fn apply_effect(
        &mut self,
        state: &mut CombatState,
        env: &CombatEnv<'_>,
    ) -> Option<VisualRequest> {
        self.phase = Phase::Executed;
        let actor = self.actor;
        let target = self.target;

        match &self.body {
            ActionBody::Move { .. } | ActionBody::Rotate360 => None,
            ActionBody::MoveStep { dir } => {
                let dir = *dir;
                if !env.grid.is_walkable(target) || state.is_occupied(target) {
                    tracing::warn!(%actor, ?target, "step destination no longer free; skipping");
                    return None;
                }
                let me = state.actor_mut(actor)?;
                let from = me.cell;
                me.cell = target;
                me.facing = dir;
                Some(VisualRequest::MoveStep {
                    actor,
                    from,
                    to: target,
                })
            }
            ActionBody::Rotate { to_dir } => {
                let to_dir = *to_dir;
                let me = state.actor_mut(actor)?;
                if me.facing == to_dir {
                    return None;
                }
                let from = me.facing;
                me.facing = to_dir;
                Some(VisualRequest::Rotate {
                    actor,
                    from,
                    to: to_dir,
                })
            }
            ActionBody::Interact => match state.take_item(target) {
                Some(item) => {
                    state.actor_mut(actor)?.inventory.push(item);
                    None
                }
                None => {
                    tracing::warn!(%actor, ?target, "nothing left to pick up; skipping");
                    None
                }
            },
            ActionBody::MeleeAttack { damage } => {
                let damage = *damage;
                match state.actor_at(target).map(|(id, _)| id) {
                    Some(victim) => {
                        remove_health(state, victim, damage);
                        Some(VisualRequest::Strike { actor, target })
                    }
                    None => {
                        tracing::warn!(%actor, ?target, "melee target already gone; skipping");
                        None
                    }
                }
            }
            ActionBody::RangedAttack { damage, .. } => {
                let damage = *damage;
                let from = state.actor(actor)?.cell;
                match state.actor_at(target).map(|(id, _)| id) {
                    Some(victim) => {
                        remove_health(state, victim, damage);
                        Some(VisualRequest::Projectile {
                            actor,
                            from,
                            to: target,
                        })
                    }
                    None => {
                        tracing::warn!(%actor, ?target, "ranged target already gone; skipping");
                        None
                    }
                }
            }
            ActionBody::Throw { arc } => {
                let arc = arc.clone();
                let me = state.actor_mut(actor)?;
                let holds_grenade = me
                    .equipped
                    .as_ref()
                    .is_some_and(|item| item.kind == ItemKind::Grenade);
                if !holds_grenade {
                    tracing::warn!(%actor, "no grenade in hand at throw time; skipping");
                    return None;
                }
                me.equipped = None;
                arc.map(|arc| VisualRequest::ArcThrow { actor, arc })
            }
            ActionBody::Explode {
                radius: _,
                damage: _,
                delay_turns,
            } => {
                // Arm the detonator; the turn driver ticks it down across
                // turn boundaries and fires the deferred blast.
                self.delay = Some(DelayState::new(*delay_turns));
                None
            }
        }
    }

    /// Hands the armed detonator to the driver's pending registry, if this
    /// node armed one during execution.
    pub fn take_detonation(&mut self) -> Option<PendingDetonation> {
        let delay = self.delay.take()?;
        let ActionBody::Explode { radius, damage, .. } = &self.body else {
            return None;
        };
        Some(PendingDetonation::new(self.target, *radius, *damage, delay))
    }

    // ------------------------------------------------------------------
    // Phase 3: Complete
    // ------------------------------------------------------------------

    /// Kind cleanup, then unconditional cost deduction: every entry of the
    /// cost map is subtracted from the actor's ledger. A stat missing from
    /// the ledger is logged and skipped, not treated as fatal.
    pub fn complete(&mut self, state: &mut CombatState) {
        self.phase = Phase::Completed;
        for (kind, amount) in self.costs.iter() {
            match state
                .actor_mut(self.actor)
                .and_then(|a| a.stats.stat_mut(kind))
            {
                Some(stat) => stat.remove_value(amount),
                None => {
                    tracing::warn!(
                        actor = %self.actor,
                        stat = %kind,
                        "stat missing from ledger during deduction; skipping"
                    );
                }
            }
        }
    }
}

/// Removes health from `victim`, skipping (with a log line) actors that
/// carry no health stat.
fn remove_health(state: &mut CombatState, victim: ActorId, damage: i64) {
    match state
        .actor_mut(victim)
        .and_then(|a| a.stats.stat_mut(crate::stats::StatKind::Health))
    {
        Some(hp) => hp.remove_value(damage),
        None => tracing::warn!(%victim, "target has no health stat; damage skipped"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SquareGrid;
    use crate::state::{ActorState, Faction, Item};
    use crate::stats::{Stat, StatKind, StatSheet};

    fn arena() -> (SquareGrid, CombatState) {
        let grid = SquareGrid::new(8, 8);
        let mut state = CombatState::new();
        state.insert_actor(
            ActorId(1),
            ActorState::new(
                Cell::new(0, 0),
                CompassDir::North,
                Faction::Player,
                StatSheet::soldier(40, 30, 25),
            ),
        );
        (grid, state)
    }

    #[test]
    fn move_setup_builds_one_step_per_path_cell() {
        let (grid, state) = arena();
        let env = CombatEnv::new(&grid, &grid);
        let mut action = Action::new(
            ActionBody::Move { path: Vec::new() },
            ActorId(1),
            Cell::new(0, 0),
            Cell::new(3, 0),
            CostMap::time_and_stamina(14, 8),
        );

        action.setup(&state, &env);
        assert_eq!(action.children.len(), 3);
        assert!(action
            .children
            .iter()
            .all(|c| c.kind() == ActionKind::MoveStep));
        // Children are zero-cost; the parent charges the aggregate.
        assert!(action.children.iter().all(|c| c.costs.is_empty()));
    }

    #[test]
    fn setup_is_idempotent() {
        let (grid, state) = arena();
        let env = CombatEnv::new(&grid, &grid);
        let mut action = Action::new(
            ActionBody::Move { path: Vec::new() },
            ActorId(1),
            Cell::new(0, 0),
            Cell::new(3, 0),
            CostMap::new(),
        );

        action.setup(&state, &env);
        let first: Vec<Cell> = action.children.iter().map(|c| c.target).collect();
        action.setup(&state, &env);
        let second: Vec<Cell> = action.children.iter().map(|c| c.target).collect();

        assert_eq!(first, second);
        assert_eq!(action.children.len(), 3);
    }

    #[test]
    fn move_step_inserts_rotation_only_when_needed() {
        let (grid, state) = arena();
        let env = CombatEnv::new(&grid, &grid);

        // Facing North, stepping East: rotation child expected.
        let mut turn_step = Action::new(
            ActionBody::MoveStep {
                dir: CompassDir::East,
            },
            ActorId(1),
            Cell::new(0, 0),
            Cell::new(1, 0),
            CostMap::new(),
        );
        turn_step.setup(&state, &env);
        assert_eq!(turn_step.children.len(), 1);
        assert_eq!(turn_step.children[0].kind(), ActionKind::Rotate);

        // Facing North, stepping North: no rotation child.
        let mut straight_step = Action::new(
            ActionBody::MoveStep {
                dir: CompassDir::North,
            },
            ActorId(1),
            Cell::new(0, 0),
            Cell::new(0, 1),
            CostMap::new(),
        );
        straight_step.setup(&state, &env);
        assert!(straight_step.children.is_empty());
    }

    #[test]
    fn rotate360_skips_missing_neighbors() {
        let mut grid = SquareGrid::new(8, 8);
        grid.carve_void(Cell::new(0, 3));
        grid.carve_void(Cell::new(0, 4));
        let mut state = CombatState::new();
        state.insert_actor(
            ActorId(1),
            ActorState::new(
                Cell::new(1, 4),
                CompassDir::North,
                Faction::Player,
                StatSheet::soldier(40, 30, 25),
            ),
        );
        let env = CombatEnv::new(&grid, &grid);

        // West and SouthWest neighbors were carved off the map: 6 of 8
        // sweep directions remain.
        let mut sweep = Action::new(
            ActionBody::Rotate360,
            ActorId(1),
            Cell::new(1, 4),
            Cell::new(1, 4),
            CostMap::new(),
        );
        sweep.setup(&state, &env);
        assert_eq!(sweep.children.len(), 6);
        assert!(sweep.children.iter().all(|c| c.kind() == ActionKind::Rotate));
    }

    #[test]
    fn complete_deducts_costs_and_skips_missing_stats() {
        let (grid, mut state) = arena();
        let _ = grid;
        let mut sheet = StatSheet::new();
        sheet.set(StatKind::TimeUnits, Stat::new(0, 20));
        // No stamina stat on this actor.
        state.actor_mut(ActorId(1)).unwrap().stats = sheet;

        let mut action = Action::new(
            ActionBody::Rotate {
                to_dir: CompassDir::East,
            },
            ActorId(1),
            Cell::new(0, 0),
            Cell::new(0, 0),
            CostMap::time_and_stamina(2, 2),
        );
        action.complete(&mut state);

        let stats = &state.actor(ActorId(1)).unwrap().stats;
        assert_eq!(stats.current(StatKind::TimeUnits), 18);
        assert_eq!(stats.stat(StatKind::Stamina), None);
        assert_eq!(action.phase(), Phase::Completed);
    }

    #[test]
    fn melee_on_vanished_target_is_a_no_op() {
        let (grid, mut state) = arena();
        let env = CombatEnv::new(&grid, &grid);
        let mut strike = Action::new(
            ActionBody::MeleeAttack { damage: 10 },
            ActorId(1),
            Cell::new(0, 0),
            Cell::new(1, 0),
            CostMap::time_and_stamina(6, 2),
        );

        // Nobody at (1,0): the effect degrades, completion still charges.
        assert_eq!(strike.apply_effect(&mut state, &env), None);
        strike.complete(&mut state);
        assert_eq!(
            state.actor(ActorId(1)).unwrap().stats.current(StatKind::TimeUnits),
            34
        );
    }

    #[test]
    fn explode_arms_a_detonator_for_the_driver() {
        let (grid, mut state) = arena();
        state.actor_mut(ActorId(1)).unwrap().equipped =
            Some(Item::new("frag grenade", ItemKind::Grenade, 2, 15));
        let env = CombatEnv::new(&grid, &grid);

        let mut boom = Action::new(
            ActionBody::Explode {
                radius: 2,
                damage: 15,
                delay_turns: 2,
            },
            ActorId(1),
            Cell::new(0, 0),
            Cell::new(4, 4),
            CostMap::time_and_stamina(6, 4),
        );
        assert_eq!(boom.apply_effect(&mut state, &env), None);

        let pending = boom.take_detonation().expect("detonator should be armed");
        assert_eq!(pending.cell, Cell::new(4, 4));
        assert_eq!(pending.radius, 2);
        // Only one detonator per execution.
        assert!(boom.take_detonation().is_none());
    }
}
