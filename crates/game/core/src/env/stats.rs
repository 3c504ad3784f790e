use crate::types::{EntityId, ItemRef, StatId};

/// Stat oracle exposing per-entity stat values and equipped items.
///
/// Consumed, never implemented, by the core. Values are read fresh on every
/// evaluation since equipment can change between turns.
pub trait StatOracle: Send + Sync {
    /// Base value of `stat` on `entity`, or `None` if the entity lacks it.
    fn stat(&self, entity: EntityId, stat: StatId) -> Option<f32>;

    /// Items currently equipped by `entity`, in slot order.
    fn equipped_items(&self, entity: EntityId) -> &[ItemRef];

    /// Value of `stat` defined by `item`, or `None` if the item does not define it.
    fn item_stat(&self, item: ItemRef, stat: StatId) -> Option<f32>;
}
