//! The action tree executor.
//!
//! Walks an [`Action`] tree depth-first: each child runs all three of its
//! phases (and its own subtree) before the next sibling starts, and every
//! child finishes before the parent applies its own effect. Visuals are
//! awaited between a node's Execute and Complete phases, which makes the
//! sink a logical barrier rather than a fire-and-forget side channel.

use std::future::Future;
use std::pin::Pin;

use combat_core::{Action, CombatEnv, CombatState, PendingDetonation};

use crate::sink::PresentationSink;

/// Runs one action node and its whole subtree to completion.
///
/// Armed detonators are harvested into `pending`; they belong to the turn
/// driver afterwards, not to the (now completed) action.
pub(crate) fn run_action<'a>(
    action: &'a mut Action,
    state: &'a mut CombatState,
    env: CombatEnv<'a>,
    sink: &'a dyn PresentationSink,
    pending: &'a mut Vec<PendingDetonation>,
) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
    Box::pin(async move {
        action.setup(state, &env);

        // The child list is detached during recursion so the parent and the
        // child being run never hold overlapping borrows.
        let mut children = std::mem::take(&mut action.children);
        for child in children.iter_mut() {
            run_action(child, state, env, sink, pending).await;
        }
        action.children = children;

        if let Some(visual) = action.apply_effect(state, &env) {
            sink.present(&visual).await;
        }
        if let Some(detonation) = action.take_detonation() {
            pending.push(detonation);
        }
        action.complete(state);
    })
}
