//! Equipment-derived stats.

use crate::env::StatOracle;
use crate::types::{EntityId, StatId};

use super::aggregate::{AggregationMode, Aggregator};

/// Aggregated equipment value together with how many items contributed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquipmentStat {
    pub value: f32,
    pub contributors: usize,
}

impl EquipmentStat {
    /// `true` when no equipped item defines the stat, in which case `value`
    /// is the mode's seed.
    pub const fn is_empty(&self) -> bool {
        self.contributors == 0
    }
}

/// Aggregates `stat` over the items `entity` has equipped.
///
/// Items that do not define the stat are skipped entirely: they neither add
/// a zero nor count toward an average.
pub fn equipped_stat<O>(
    oracle: &O,
    entity: EntityId,
    stat: StatId,
    mode: AggregationMode,
) -> EquipmentStat
where
    O: StatOracle + ?Sized,
{
    let mut aggregator = Aggregator::new(mode);
    aggregator.extend(
        oracle
            .equipped_items(entity)
            .iter()
            .filter_map(|&item| oracle.item_stat(item, stat)),
    );

    EquipmentStat {
        value: aggregator.finish(),
        contributors: aggregator.count(),
    }
}
