//! Action definitions: reusable templates that judge and price actions.
//!
//! A definition never mutates game state. It validates legality, computes
//! a [`CostMap`] for a prospective (actor, start, target) triple, lists
//! candidate target cells, scores them for the AI, and instantiates
//! concrete [`Action`](crate::action::Action) trees. The evaluating actor
//! is threaded through every call; definitions carry no per-call scratch
//! state and can be shared freely.

use crate::action::error::RefusalReason;
use crate::action::kinds;
use crate::env::CombatEnv;
use crate::grid::Cell;
use crate::state::{ActorId, ActorState, CombatState, ItemKind};
use crate::stats::CostMap;

// ============================================================================
// Action Kind
// ============================================================================

/// Every action the combat core knows how to validate and run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Move,
    MoveStep,
    Rotate,
    Rotate360,
    Interact,
    MeleeAttack,
    RangedAttack,
    Throw,
    Explode,
}

impl ActionKind {
    /// Kinds that target the actor's own cell; their candidate-cell
    /// enumeration is the single start-cell sentinel.
    pub fn is_self_targeted(self) -> bool {
        matches!(
            self,
            ActionKind::Move | ActionKind::MoveStep | ActionKind::Rotate | ActionKind::Rotate360
        )
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// Kind-specific tuning knobs. Unused fields stay at their defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionParams {
    /// Reach in king moves for ranged and thrown attacks.
    pub range: u32,
    /// Flat damage added on top of the weapon's own.
    pub bonus_damage: i64,
    /// Blast radius for delayed detonations.
    pub explosion_radius: u32,
    /// Turn boundaries before a thrown charge goes off.
    pub turns_until_explode: u32,
    /// Item class the actor must have equipped, if any.
    pub required_item: Option<ItemKind>,
}

impl Default for ActionParams {
    fn default() -> Self {
        Self {
            range: 0,
            bonus_damage: 0,
            explosion_radius: 0,
            turns_until_explode: 0,
            required_item: None,
        }
    }
}

// ============================================================================
// Action Definition
// ============================================================================

/// Immutable template for one action kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDefinition {
    pub kind: ActionKind,
    /// Human-readable name shown in selection UI.
    pub name: String,
    /// Input binding the UI layer maps to this action.
    #[cfg_attr(feature = "serde", serde(default))]
    pub input_binding: Option<String>,
    /// Whether the action appears in the on-screen action bar.
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub ui_visible: bool,
    /// Active without an item granting it (movement, rotation).
    #[cfg_attr(feature = "serde", serde(default))]
    pub always_active: bool,
    /// Keep the action selected after it has been used.
    #[cfg_attr(feature = "serde", serde(default))]
    pub remain_selected: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: ActionParams,
}

#[cfg(feature = "serde")]
fn default_true() -> bool {
    true
}

/// Outcome of a validation query. `ok == false` always carries the
/// rejected cost sentinel and a reason.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionCheck {
    pub ok: bool,
    pub costs: CostMap,
    pub reason: Option<RefusalReason>,
}

impl ActionCheck {
    fn allowed(costs: CostMap) -> Self {
        Self {
            ok: true,
            costs,
            reason: None,
        }
    }

    fn rejected(reason: RefusalReason) -> Self {
        Self {
            ok: false,
            costs: CostMap::rejected(),
            reason: Some(reason),
        }
    }
}

/// Best AI pick for one definition: target cell, heuristic score and the
/// validated cost of taking it.
#[derive(Clone, Debug, PartialEq)]
pub struct AiChoice {
    pub cell: Option<Cell>,
    pub score: i64,
    pub costs: CostMap,
}

impl AiChoice {
    /// The "nothing passed validation" sentinel.
    pub fn none() -> Self {
        Self {
            cell: None,
            score: i64::MIN,
            costs: CostMap::rejected(),
        }
    }
}

impl ActionDefinition {
    pub fn new(kind: ActionKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            input_binding: None,
            ui_visible: true,
            always_active: false,
            remain_selected: false,
            params: ActionParams::default(),
        }
    }

    pub fn with_params(mut self, params: ActionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_binding(mut self, binding: impl Into<String>) -> Self {
        self.input_binding = Some(binding.into());
        self
    }

    /// Full validation: preconditions, kind-specific legality and cost,
    /// then the mandatory affordability gate. Never panics; every failure
    /// is normalized to the rejected cost sentinel plus a reason.
    pub fn can_take_action(
        &self,
        state: &CombatState,
        env: &CombatEnv<'_>,
        actor: ActorId,
        start: Cell,
        target: Cell,
    ) -> ActionCheck {
        match self.validate(state, env, actor, start, target, true) {
            Ok(costs) => ActionCheck::allowed(costs),
            Err(reason) => ActionCheck::rejected(reason),
        }
    }

    /// Kind-specific validation and pricing without the affordability
    /// gate. Used when a cost estimate is needed without committing, e.g.
    /// a sub-action estimating what its parent will ultimately charge.
    pub fn build_costs_only(
        &self,
        state: &CombatState,
        env: &CombatEnv<'_>,
        actor: ActorId,
        start: Cell,
        target: Cell,
    ) -> ActionCheck {
        match self.validate(state, env, actor, start, target, false) {
            Ok(costs) => ActionCheck::allowed(costs),
            Err(reason) => ActionCheck::rejected(reason),
        }
    }

    fn validate(
        &self,
        state: &CombatState,
        env: &CombatEnv<'_>,
        actor: ActorId,
        start: Cell,
        target: Cell,
        check_affordability: bool,
    ) -> Result<CostMap, RefusalReason> {
        // Preconditions shared by every kind.
        let actor_state = state.actor(actor).ok_or(RefusalReason::MissingActor)?;
        if actor_state.stats.is_empty() {
            return Err(RefusalReason::MissingStats);
        }
        if !env.grid.contains(start) {
            return Err(RefusalReason::OffGrid { cell: start });
        }
        if !env.grid.contains(target) {
            return Err(RefusalReason::OffGrid { cell: target });
        }

        let costs = self.kind_costs(state, env, actor_state, start, target)?;

        // The affordability gate always runs last; kind logic cannot skip it.
        if check_affordability && !actor_state.stats.can_afford(&costs) {
            return Err(RefusalReason::CannotAfford);
        }
        Ok(costs)
    }

    /// Dispatch into the per-kind validator table.
    fn kind_costs(
        &self,
        state: &CombatState,
        env: &CombatEnv<'_>,
        actor: &ActorState,
        start: Cell,
        target: Cell,
    ) -> Result<CostMap, RefusalReason> {
        match self.kind {
            ActionKind::Move => kinds::movement::validate_move(state, env, actor.facing, start, target),
            ActionKind::MoveStep => {
                kinds::movement::validate_move_step(state, env, actor.facing, start, target)
            }
            ActionKind::Rotate => kinds::rotation::validate_rotate(actor.facing, start, target),
            ActionKind::Rotate360 => kinds::rotation::validate_rotate360(env, start),
            ActionKind::Interact => {
                kinds::interact::validate_interact(state, env, actor.facing, start, target)
            }
            ActionKind::MeleeAttack => kinds::combat::validate_melee(state, env, actor, start, target),
            ActionKind::RangedAttack => {
                kinds::combat::validate_ranged(state, env, actor, start, target, self.params.range)
            }
            ActionKind::Throw | ActionKind::Explode => {
                kinds::throwing::validate_throw(env, actor, start, target, self.params.range)
            }
        }
    }

    /// Candidate target cells for this definition from `start`.
    ///
    /// Self-targeted kinds return the single start-cell sentinel; the rest
    /// enumerate whatever the kind can point at. Candidates are not yet
    /// validated; callers filter through [`Self::can_take_action`].
    pub fn valid_cells(
        &self,
        state: &CombatState,
        env: &CombatEnv<'_>,
        actor: ActorId,
        start: Cell,
    ) -> Vec<Cell> {
        if self.kind.is_self_targeted() {
            return vec![start];
        }
        match self.kind {
            ActionKind::Interact => state.item_cells(),
            ActionKind::MeleeAttack | ActionKind::RangedAttack => state
                .hostiles_of(actor)
                .into_iter()
                .map(|(_, a)| a.cell)
                .collect(),
            ActionKind::Throw | ActionKind::Explode => {
                env.grid.cells_in_range(start, self.params.range)
            }
            _ => vec![start],
        }
    }

    /// Heuristic desirability of `target` for this definition. Higher is
    /// better. `i64::MIN` marks an unusable target; blast kinds use 0 for
    /// an empty blast instead, so a legal but pointless throw ranks below
    /// any hit.
    pub fn ai_score(
        &self,
        state: &CombatState,
        env: &CombatEnv<'_>,
        actor: ActorId,
        target: Cell,
    ) -> i64 {
        let Some(me) = state.actor(actor) else {
            return i64::MIN;
        };
        let start = me.cell;

        match self.kind {
            ActionKind::MeleeAttack => {
                let damage = me
                    .equipped_of_kind(ItemKind::MeleeWeapon)
                    .map_or(0, |w| w.damage);
                match state.actor_at(target) {
                    Some((id, _)) if state.hostiles_of(actor).iter().any(|(h, _)| *h == id) => {
                        60 + damage + self.params.bonus_damage - 2 * i64::from(start.chebyshev(target))
                    }
                    _ => i64::MIN,
                }
            }
            ActionKind::RangedAttack => {
                let damage = me
                    .equipped_of_kind(ItemKind::RangedWeapon)
                    .map_or(0, |w| w.damage);
                match state.actor_at(target) {
                    Some((id, _)) if state.hostiles_of(actor).iter().any(|(h, _)| *h == id) => {
                        40 + damage + self.params.bonus_damage - i64::from(start.chebyshev(target))
                    }
                    _ => i64::MIN,
                }
            }
            ActionKind::Throw | ActionKind::Explode => {
                let radius = self.params.explosion_radius;
                let caught = state
                    .hostiles_of(actor)
                    .iter()
                    .filter(|(_, a)| a.cell.chebyshev(target) <= radius)
                    .count() as i64;
                // Blasts that would catch the thrower rank as pointless.
                let friendly_fire = env
                    .grid
                    .cells_in_range(target, radius)
                    .contains(&start);
                if caught == 0 || friendly_fire {
                    0
                } else {
                    caught * (25 + self.params.bonus_damage)
                }
            }
            ActionKind::Interact => {
                if state.item_at(target).is_some() {
                    15 - i64::from(start.chebyshev(target))
                } else {
                    i64::MIN
                }
            }
            // Self-targeted kinds are picked by position logic, not by
            // per-cell scoring.
            _ => 0,
        }
    }

    /// Evaluates every candidate cell, keeps those that pass full
    /// validation, and returns the best by score. Ties break toward the
    /// first maximal candidate in enumeration order.
    pub fn best_ai_action(
        &self,
        state: &CombatState,
        env: &CombatEnv<'_>,
        actor: ActorId,
    ) -> AiChoice {
        let Some(me) = state.actor(actor) else {
            return AiChoice::none();
        };
        let start = me.cell;

        let mut best = AiChoice::none();
        for cell in self.valid_cells(state, env, actor, start) {
            let check = self.can_take_action(state, env, actor, start, cell);
            if !check.ok {
                continue;
            }
            let score = self.ai_score(state, env, actor, cell);
            tracing::debug!(
                action = %self.kind,
                %actor,
                ?cell,
                score,
                "scored candidate cell"
            );
            if best.cell.is_none() || score > best.score {
                best = AiChoice {
                    cell: Some(cell),
                    score,
                    costs: check.costs,
                };
            }
        }
        best
    }
}
