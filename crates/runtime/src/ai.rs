//! Behavior-tree AI for computer-controlled combatants.
//!
//! The tree plans exactly one action per tick: leaves score candidate
//! (definition, target) pairs through the core's validation and write the
//! winner into the [`AiTurnContext`] blackboard. The driver then spends
//! the plan and ticks again until the budget or the stat ledger runs dry.

use behavior_tree::builder::{act, condition, selector, sequence};
use behavior_tree::{Behavior, Status};
use combat_core::{ActionKind, ActorId, Cell, CombatEnv, CombatState};

use crate::catalog::ActionCatalog;

/// Kinds the tree considers when an enemy is on the field.
const ATTACK_KINDS: [ActionKind; 4] = [
    ActionKind::MeleeAttack,
    ActionKind::RangedAttack,
    ActionKind::Throw,
    ActionKind::Explode,
];

/// The action an AI tick decided to take.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedAction {
    /// Catalog name of the chosen definition.
    pub name: String,
    pub target: Cell,
    pub score: i64,
}

/// Blackboard for one AI planning tick.
///
/// Borrows the combat state immutably; the plan is executed by the driver
/// after the tree (and these borrows) are gone.
pub struct AiTurnContext<'a> {
    pub actor: ActorId,
    pub state: &'a CombatState,
    pub env: CombatEnv<'a>,
    pub catalog: &'a ActionCatalog,
    planned: Option<PlannedAction>,
}

impl<'a> AiTurnContext<'a> {
    pub fn new(
        actor: ActorId,
        state: &'a CombatState,
        env: CombatEnv<'a>,
        catalog: &'a ActionCatalog,
    ) -> Self {
        Self {
            actor,
            state,
            env,
            catalog,
            planned: None,
        }
    }

    pub fn has_hostiles(&self) -> bool {
        !self.state.hostiles_of(self.actor).is_empty()
    }

    pub fn take_planned(&mut self) -> Option<PlannedAction> {
        self.planned.take()
    }

    /// Scores every catalog definition of the given kinds and plans the
    /// best validated (definition, target) pair. Ties break toward the
    /// earlier catalog entry.
    fn plan_best_of(&mut self, kinds: &[ActionKind]) -> Status {
        let mut best: Option<PlannedAction> = None;
        for def in self.catalog.iter().filter(|d| kinds.contains(&d.kind)) {
            let choice = def.best_ai_action(self.state, &self.env, self.actor);
            let Some(cell) = choice.cell else {
                continue;
            };
            if best.as_ref().is_none_or(|b| choice.score > b.score) {
                best = Some(PlannedAction {
                    name: def.name.clone(),
                    target: cell,
                    score: choice.score,
                });
            }
        }
        match best {
            Some(plan) => {
                tracing::debug!(
                    actor = %self.actor,
                    action = %plan.name,
                    target = ?plan.target,
                    score = plan.score,
                    "planned action"
                );
                self.planned = Some(plan);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// The standard soldier brain.
///
/// Priorities: attack a hostile if any is reachable, otherwise grab loot,
/// otherwise sweep for threats. Each branch fails cleanly into the next
/// when nothing validates, so the tree as a whole fails only when the
/// actor can do nothing at all this tick.
pub fn soldier_tree<'a>() -> Box<dyn Behavior<AiTurnContext<'a>> + 'a> {
    selector(vec![
        sequence(vec![
            condition(|ctx: &AiTurnContext<'_>| ctx.has_hostiles()),
            act(|ctx: &mut AiTurnContext<'_>| ctx.plan_best_of(&ATTACK_KINDS)),
        ]),
        act(|ctx: &mut AiTurnContext<'_>| ctx.plan_best_of(&[ActionKind::Interact])),
        act(|ctx: &mut AiTurnContext<'_>| ctx.plan_best_of(&[ActionKind::Rotate360])),
    ])
}
