//! Stat aggregation and snapshots.
//!
//! Equipment contributions are merged by an [`AggregationMode`]; the results
//! are frozen into [`StatSnapshot`]s that the combat formulas read. Nothing
//! here caches across turns since equipment can change between them.

mod aggregate;
mod equipment;
mod snapshot;

pub use aggregate::{AggregationMode, Aggregator, aggregate};
pub use equipment::{EquipmentStat, equipped_stat};
pub use snapshot::StatSnapshot;
