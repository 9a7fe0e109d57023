//! Stat ledger: the per-actor resource pools actions spend.
//!
//! Actions never mutate stats directly during validation; they build a
//! [`CostMap`] and the ledger is charged once, at each action node's
//! Complete phase.

mod cost;

pub use cost::CostMap;

// ============================================================================
// Stat Kind
// ============================================================================

/// The resource pools an action can charge.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    /// The turn budget every action spends from.
    TimeUnits,
    /// Physical exertion; spent alongside time units.
    Stamina,
    /// Hit points; removed by damage effects, not by acting.
    Health,
}

// ============================================================================
// Stat
// ============================================================================

/// A single clamped resource pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    current: i64,
    min: i64,
    max: i64,
}

impl Stat {
    /// Creates a stat at `max`, bounded to `[min, max]`.
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            current: max,
            min,
            max,
        }
    }

    /// Creates a stat with an explicit current value, clamped to bounds.
    pub fn with_current(min: i64, max: i64, current: i64) -> Self {
        Self {
            current: current.clamp(min, max),
            min,
            max,
        }
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= self.min
    }

    /// Subtracts `amount`, clamping at the lower bound.
    pub fn remove_value(&mut self, amount: i64) {
        self.current = (self.current - amount).clamp(self.min, self.max);
    }

    /// Adds `amount`, clamping at the upper bound.
    pub fn add_value(&mut self, amount: i64) {
        self.current = (self.current + amount).clamp(self.min, self.max);
    }
}

// ============================================================================
// Stat Sheet
// ============================================================================

/// An actor's full ledger of stats.
///
/// Stored as an ordered map so deduction and logging iterate
/// deterministically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSheet {
    stats: std::collections::BTreeMap<StatKind, Stat>,
}

impl StatSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard soldier loadout used by scenario content and tests.
    pub fn soldier(time_units: i64, stamina: i64, health: i64) -> Self {
        let mut sheet = Self::new();
        sheet.set(StatKind::TimeUnits, Stat::new(0, time_units));
        sheet.set(StatKind::Stamina, Stat::new(0, stamina));
        sheet.set(StatKind::Health, Stat::new(0, health));
        sheet
    }

    /// True when the sheet holds no stats at all (no ledger to charge).
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn set(&mut self, kind: StatKind, stat: Stat) {
        self.stats.insert(kind, stat);
    }

    pub fn stat(&self, kind: StatKind) -> Option<&Stat> {
        self.stats.get(&kind)
    }

    pub fn stat_mut(&mut self, kind: StatKind) -> Option<&mut Stat> {
        self.stats.get_mut(&kind)
    }

    /// Current value of a stat; 0 when the stat is absent.
    pub fn current(&self, kind: StatKind) -> i64 {
        self.stats.get(&kind).map_or(0, Stat::current)
    }

    /// True when every positive cost entry is coverable by the matching
    /// stat's current value. A stat missing from the sheet cannot cover a
    /// positive cost.
    pub fn can_afford(&self, costs: &CostMap) -> bool {
        costs.iter().all(|(kind, amount)| {
            amount <= 0 || self.stat(kind).is_some_and(|s| s.current() >= amount)
        })
    }
}
