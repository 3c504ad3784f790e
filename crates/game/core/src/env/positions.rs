use crate::types::{EntityId, Position};

/// Position oracle used for distance decay and target validity.
pub trait PositionOracle: Send + Sync {
    /// Current position of `entity`, or `None` if the handle is stale or the
    /// entity has been destroyed.
    fn position(&self, entity: EntityId) -> Option<Position>;

    /// Whether `entity` still refers to a live entity.
    fn is_valid(&self, entity: EntityId) -> bool {
        self.position(entity).is_some()
    }
}
