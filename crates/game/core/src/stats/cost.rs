//! Cost maps: the per-action charge against the stat ledger.

use super::StatKind;

/// Sentinel amount marking a rejected action's cost entries.
pub const REJECTED_COST: i64 = -1;

/// Mapping from stat kind to a signed charge amount.
///
/// Keys that are absent are treated as zero cost. Legal actions carry only
/// amounts >= 0; the reserved rejected form (see [`CostMap::rejected`])
/// carries `-1` on TimeUnits and Stamina and means "do not attempt; this
/// cost is not real".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMap {
    entries: std::collections::BTreeMap<StatKind, i64>,
}

impl CostMap {
    /// An empty (free) cost map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The normalized rejected sentinel: every populated stat is `-1`.
    ///
    /// All validation failures return exactly this value so callers can
    /// rely on a single failure representation.
    pub fn rejected() -> Self {
        let mut costs = Self::new();
        costs.entries.insert(StatKind::TimeUnits, REJECTED_COST);
        costs.entries.insert(StatKind::Stamina, REJECTED_COST);
        costs
    }

    /// True when this map is the rejected sentinel.
    pub fn is_rejected(&self) -> bool {
        !self.entries.is_empty() && self.entries.values().all(|&v| v == REJECTED_COST)
    }

    /// Adds `amount` to the entry for `kind`.
    pub fn add(&mut self, kind: StatKind, amount: i64) {
        *self.entries.entry(kind).or_insert(0) += amount;
    }

    /// Adds every entry of `other` into this map.
    pub fn merge(&mut self, other: &CostMap) {
        for (kind, amount) in other.iter() {
            self.add(kind, amount);
        }
    }

    /// The charge for `kind`; absent entries are zero.
    pub fn get(&self, kind: StatKind) -> i64 {
        self.entries.get(&kind).copied().unwrap_or(0)
    }

    /// Zeroes every entry in place.
    ///
    /// Used on sub-actions when the parent charges the aggregate, so the
    /// same cost is never deducted twice.
    pub fn clear_to_zero(&mut self) {
        for amount in self.entries.values_mut() {
            *amount = 0;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in stat-kind order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, i64)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }

    /// Convenience constructor for the common TU + stamina pair.
    pub fn time_and_stamina(time_units: i64, stamina: i64) -> Self {
        let mut costs = Self::new();
        costs.add(StatKind::TimeUnits, time_units);
        costs.add(StatKind::Stamina, stamina);
        costs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_entries_read_as_zero() {
        let costs = CostMap::new();
        assert_eq!(costs.get(StatKind::Health), 0);
    }

    #[test]
    fn rejected_sentinel_is_minus_one_everywhere() {
        let costs = CostMap::rejected();
        assert!(costs.is_rejected());
        assert_eq!(costs.get(StatKind::TimeUnits), REJECTED_COST);
        assert_eq!(costs.get(StatKind::Stamina), REJECTED_COST);
        assert!(costs.iter().all(|(_, v)| v == REJECTED_COST));
    }

    #[test]
    fn merge_sums_per_stat() {
        let mut a = CostMap::time_and_stamina(4, 2);
        let b = CostMap::time_and_stamina(6, 2);
        a.merge(&b);
        assert_eq!(a.get(StatKind::TimeUnits), 10);
        assert_eq!(a.get(StatKind::Stamina), 4);
    }

    #[test]
    fn clear_to_zero_keeps_keys() {
        let mut costs = CostMap::time_and_stamina(7, 3);
        costs.clear_to_zero();
        assert!(!costs.is_empty());
        assert_eq!(costs.get(StatKind::TimeUnits), 0);
        assert_eq!(costs.get(StatKind::Stamina), 0);
        assert!(!costs.is_rejected());
    }
}
