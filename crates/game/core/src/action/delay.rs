//! Deferred effects that outlive the action which created them.
//!
//! An Explode action throws its charge immediately but detonates later:
//! execution arms a [`DelayState`], the turn driver harvests it as a
//! [`PendingDetonation`] and ticks it at every turn boundary until it
//! fires. Firing happens exactly once per armed delay.

use crate::grid::{Cell, GridOracle};
use crate::state::{ActorId, CombatState};
use crate::stats::StatKind;

use super::tree::VisualRequest;

// ============================================================================
// Delay State
// ============================================================================

/// Turn-boundary countdown. `on_turn_tick` reports `true` exactly once,
/// on the tick that exhausts the counter; later ticks stay `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayState {
    turns_remaining: u32,
    fired: bool,
}

impl DelayState {
    pub fn new(turns: u32) -> Self {
        Self {
            turns_remaining: turns,
            fired: false,
        }
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// Advances the countdown by one turn boundary.
    pub fn on_turn_tick(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.turns_remaining = self.turns_remaining.saturating_sub(1);
        if self.turns_remaining == 0 {
            self.fired = true;
            return true;
        }
        false
    }
}

// ============================================================================
// Pending Detonation
// ============================================================================

/// A thrown charge waiting on the ground for its countdown.
///
/// Held by the turn driver, not by any action; the action that armed it
/// has long since completed when this goes off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDetonation {
    pub cell: Cell,
    pub radius: u32,
    pub damage: i64,
    delay: DelayState,
}

impl PendingDetonation {
    pub fn new(cell: Cell, radius: u32, damage: i64, delay: DelayState) -> Self {
        Self {
            cell,
            radius,
            damage,
            delay,
        }
    }

    /// Ticks the countdown; `true` means detonate now.
    pub fn on_turn_tick(&mut self) -> bool {
        self.delay.on_turn_tick()
    }

    /// Applies blast damage to every living actor within the radius,
    /// friend and foe alike, and returns the detonation visual.
    pub fn detonate(&self, state: &mut CombatState, grid: &dyn GridOracle) -> VisualRequest {
        let victims: Vec<ActorId> = grid
            .cells_in_range(self.cell, self.radius)
            .into_iter()
            .filter_map(|cell| state.actor_at(cell).map(|(id, _)| id))
            .collect();

        tracing::debug!(
            cell = ?self.cell,
            radius = self.radius,
            caught = victims.len(),
            "detonation fired"
        );

        for victim in victims {
            match state
                .actor_mut(victim)
                .and_then(|a| a.stats.stat_mut(StatKind::Health))
            {
                Some(hp) => hp.remove_value(self.damage),
                None => tracing::warn!(%victim, "caught in blast but has no health stat"),
            }
        }

        VisualRequest::Detonation {
            cell: self.cell,
            radius: self.radius,
        }
    }
}
