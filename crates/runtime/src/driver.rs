//! The turn driver: owns the combat state and runs actions to completion.
//!
//! One driver per battle. Hosts feed it attempts (from input or AI), it
//! validates them through the core, executes the resulting action trees
//! and keeps the registry of pending detonations alive across turns.

use std::sync::Arc;

use combat_core::{
    Action, ActionDefinition, ActorId, Cell, CombatEnv, CombatState, GridOracle, Pathfinder,
    PendingDetonation,
};

use crate::ai::{self, AiTurnContext};
use crate::catalog::ActionCatalog;
use crate::error::{Result, RuntimeError};
use crate::executor::run_action;
use crate::sink::PresentationSink;

pub struct TurnDriver {
    state: CombatState,
    grid: Arc<dyn GridOracle>,
    paths: Arc<dyn Pathfinder>,
    sink: Arc<dyn PresentationSink>,
    pending: Vec<PendingDetonation>,
    turn: u32,
}

impl TurnDriver {
    pub fn new(
        state: CombatState,
        grid: Arc<dyn GridOracle>,
        paths: Arc<dyn Pathfinder>,
        sink: Arc<dyn PresentationSink>,
    ) -> Self {
        Self {
            state,
            grid,
            paths,
            sink,
            pending: Vec::new(),
            turn: 0,
        }
    }

    pub fn state(&self) -> &CombatState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CombatState {
        &mut self.state
    }

    /// Completed turn boundaries so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Detonations armed but not yet fired.
    pub fn pending_detonations(&self) -> usize {
        self.pending.len()
    }

    /// Advances one turn boundary: ticks every pending detonation and
    /// fires those whose countdown just expired. Each armed charge fires
    /// exactly once; fired entries leave the registry.
    pub async fn begin_turn(&mut self) {
        self.turn += 1;
        tracing::debug!(turn = self.turn, pending = self.pending.len(), "turn boundary");

        let mut due = Vec::new();
        self.pending.retain_mut(|charge| {
            if charge.on_turn_tick() {
                due.push(charge.clone());
                false
            } else {
                true
            }
        });

        for charge in due {
            let visual = charge.detonate(&mut self.state, &*self.grid);
            self.sink.present(&visual).await;
        }
    }

    /// Validates and, if accepted, runs one action tree to completion.
    ///
    /// The refusal path reports the core's reason verbatim; nothing is
    /// charged or mutated on refusal.
    pub async fn attempt(
        &mut self,
        def: &ActionDefinition,
        actor: ActorId,
        target: Cell,
    ) -> Result<()> {
        let start = self
            .state
            .actor(actor)
            .ok_or(RuntimeError::UnknownActor(actor))?
            .cell;

        let env = CombatEnv::new(&*self.grid, &*self.paths);
        let Some(mut action) = Action::from_definition(def, &self.state, &env, actor, start, target)
        else {
            let check = def.can_take_action(&self.state, &env, actor, start, target);
            return Err(RuntimeError::Refused {
                action: def.name.clone(),
                reason: check
                    .reason
                    .unwrap_or(combat_core::RefusalReason::NoTarget),
            });
        };

        tracing::debug!(action = %def.name, %actor, ?target, "executing action");
        run_action(
            &mut action,
            &mut self.state,
            env,
            &*self.sink,
            &mut self.pending,
        )
        .await;
        Ok(())
    }

    /// Convenience wrapper resolving the definition from a catalog.
    pub async fn attempt_named(
        &mut self,
        catalog: &ActionCatalog,
        name: &str,
        actor: ActorId,
        target: Cell,
    ) -> Result<()> {
        let def = catalog.by_name(name)?.clone();
        self.attempt(&def, actor, target).await
    }

    /// Runs one AI-controlled actor's turn: plan a tick, spend it, repeat
    /// until the tree finds nothing to do or the tick budget runs out.
    ///
    /// Returns the number of actions taken. Exhausting the budget is
    /// logged as a warning; it usually means scoring and affordability
    /// disagree somewhere and the brain is spinning.
    pub async fn take_ai_turn(
        &mut self,
        actor: ActorId,
        catalog: &ActionCatalog,
        tick_budget: u32,
    ) -> Result<u32> {
        use behavior_tree::Behavior;

        if self.state.actor(actor).is_none() {
            return Err(RuntimeError::UnknownActor(actor));
        }

        let mut taken = 0;
        for _ in 0..tick_budget {
            let plan = {
                let env = CombatEnv::new(&*self.grid, &*self.paths);
                let mut ctx = AiTurnContext::new(actor, &self.state, env, catalog);
                if ai::soldier_tree().tick(&mut ctx).is_failure() {
                    break;
                }
                ctx.take_planned()
            };
            let Some(plan) = plan else { break };

            let def = catalog.by_name(&plan.name)?.clone();
            match self.attempt(&def, actor, plan.target).await {
                Ok(()) => taken += 1,
                Err(err) => {
                    // Planning validated against the same state, so a
                    // refusal here means the plan raced something.
                    tracing::warn!(%actor, action = %plan.name, %err, "planned action refused");
                    break;
                }
            }
        }
        if taken == tick_budget {
            tracing::warn!(%actor, tick_budget, "AI tick budget exhausted");
        }
        Ok(taken)
    }
}
