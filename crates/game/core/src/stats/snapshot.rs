//! Read-only stat views built fresh for each evaluation.

use arrayvec::ArrayVec;

use crate::env::StatOracle;
use crate::types::{EntityId, ItemRef, StatId};

use super::aggregate::AggregationMode;
use super::equipment::equipped_stat;

const SNAPSHOT_CAPACITY: usize = 16;

/// Mapping from stat id to value, captured at call time.
///
/// Storage is inline and sorted by id, so building one per attack allocates
/// nothing. At most [`StatSnapshot::CAPACITY`] distinct stats fit; inserting
/// a new stat into a full snapshot is ignored.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSnapshot {
    entries: ArrayVec<(StatId, f32), SNAPSHOT_CAPACITY>,
}

impl StatSnapshot {
    pub const CAPACITY: usize = SNAPSHOT_CAPACITY;

    pub fn new() -> Self {
        Self::default()
    }

    /// Base stats of `entity`. Stats the entity lacks are left out.
    pub fn capture<O>(oracle: &O, entity: EntityId, stats: &[StatId]) -> Self
    where
        O: StatOracle + ?Sized,
    {
        stats
            .iter()
            .filter_map(|&stat| oracle.stat(entity, stat).map(|value| (stat, value)))
            .collect()
    }

    /// Stats defined by a single item, typically the weapon used.
    pub fn capture_item<O>(oracle: &O, item: ItemRef, stats: &[StatId]) -> Self
    where
        O: StatOracle + ?Sized,
    {
        stats
            .iter()
            .filter_map(|&stat| oracle.item_stat(item, stat).map(|value| (stat, value)))
            .collect()
    }

    /// Base stats plus equipment aggregated under `mode`.
    ///
    /// Equipment is added only when at least one item defines the stat, so
    /// an empty loadout never leaks an infinite seed into the snapshot.
    pub fn capture_equipped<O>(
        oracle: &O,
        entity: EntityId,
        stats: &[StatId],
        mode: AggregationMode,
    ) -> Self
    where
        O: StatOracle + ?Sized,
    {
        stats
            .iter()
            .filter_map(|&stat| {
                let base = oracle.stat(entity, stat);
                let equipment = equipped_stat(oracle, entity, stat, mode);
                let value = match (base, equipment.is_empty()) {
                    (Some(base), false) => Some(base + equipment.value),
                    (Some(base), true) => Some(base),
                    (None, false) => Some(equipment.value),
                    (None, true) => None,
                };
                value.map(|value| (stat, value))
            })
            .collect()
    }

    #[must_use]
    pub fn with(mut self, stat: StatId, value: f32) -> Self {
        self.set(stat, value);
        self
    }

    /// Sets `stat`, overwriting any previous value.
    ///
    /// Returns `false` if the stat is new and the snapshot is full.
    pub fn set(&mut self, stat: StatId, value: f32) -> bool {
        match self.entries.binary_search_by_key(&stat, |&(id, _)| id) {
            Ok(index) => {
                self.entries[index].1 = value;
                true
            }
            Err(index) => self.entries.try_insert(index, (stat, value)).is_ok(),
        }
    }

    pub fn get(&self, stat: StatId) -> Option<f32> {
        self.entries
            .binary_search_by_key(&stat, |&(id, _)| id)
            .ok()
            .map(|index| self.entries[index].1)
    }

    /// Value of `stat`, treating a missing stat as zero.
    #[inline]
    pub fn value(&self, stat: StatId) -> f32 {
        self.get(stat).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatId, f32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(StatId, f32)> for StatSnapshot {
    fn from_iter<I: IntoIterator<Item = (StatId, f32)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (stat, value) in iter {
            snapshot.set(stat, value);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::equipment::tests::{ARMOR, SPEED, knight};

    #[test]
    fn capture_skips_missing_stats() {
        let (mut loadout, knight) = knight();
        loadout.base.insert((knight, StatId::LEVEL), 4.0);

        let snapshot = StatSnapshot::capture(&loadout, knight, &[StatId::LEVEL, ARMOR]);
        assert_eq!(snapshot.get(StatId::LEVEL), Some(4.0));
        assert_eq!(snapshot.get(ARMOR), None);
        assert_eq!(snapshot.value(ARMOR), 0.0);
    }

    #[test]
    fn capture_equipped_adds_aggregated_items_to_base() {
        let (mut loadout, knight) = knight();
        loadout.base.insert((knight, ARMOR), 1.0);

        let stats = [ARMOR, SPEED, StatId::LEVEL];
        let snapshot =
            StatSnapshot::capture_equipped(&loadout, knight, &stats, AggregationMode::Highest);
        assert_eq!(snapshot.get(ARMOR), Some(7.0));
        assert_eq!(snapshot.get(SPEED), Some(1.0));
        assert_eq!(snapshot.get(StatId::LEVEL), None);
    }

    #[test]
    fn capture_item_reads_a_single_item() {
        let (loadout, _) = knight();

        let helm = StatSnapshot::capture_item(&loadout, ItemRef(10), &[ARMOR, SPEED]);
        assert_eq!(helm.len(), 1);
        assert_eq!(helm.get(ARMOR), Some(2.0));
    }

    #[test]
    fn entries_stay_sorted_and_overwrite() {
        let snapshot = StatSnapshot::new()
            .with(StatId(9), 1.0)
            .with(StatId(2), 2.0)
            .with(StatId(9), 3.0);

        let stats: Vec<_> = snapshot.iter().collect();
        assert_eq!(stats, vec![(StatId(2), 2.0), (StatId(9), 3.0)]);
    }

    #[test]
    fn full_snapshot_ignores_new_stats() {
        let mut snapshot: StatSnapshot = (0..StatSnapshot::CAPACITY as u16)
            .map(|id| (StatId(id), 1.0))
            .collect();

        assert!(!snapshot.set(StatId(500), 1.0));
        assert!(snapshot.set(StatId(0), 5.0));
        assert_eq!(snapshot.get(StatId(0)), Some(5.0));
        assert_eq!(snapshot.len(), StatSnapshot::CAPACITY);
    }
}
