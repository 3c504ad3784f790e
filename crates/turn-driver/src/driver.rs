//! Core driver trait.
//!
//! This module defines the [`TurnDriver`] trait, the fundamental abstraction
//! for all decision nodes. The trait is generic over the entity type `E` the
//! host uses to reach the acting entity and the turn-scratch type `S`
//! threaded through one turn's evaluation.

/// Priority sentinel meaning "cannot act this turn".
pub const DISABLED: f32 = f32::NEG_INFINITY;

/// Returns `true` if `priority` is the [`DISABLED`] sentinel.
#[inline]
pub fn is_disabled(priority: f32) -> bool {
    priority == DISABLED
}

/// A decision node that can be evaluated against an entity and turn state.
///
/// # Turn Protocol
///
/// The scheduler calls [`init`](Self::init) once per turn, then queries
/// [`is_enabled`](Self::is_enabled) and [`priority`](Self::priority), and
/// finally [`execute`](Self::execute). Drivers keep no state between turns;
/// anything a node needs to remember within a turn goes into `state`.
///
/// Priorities must never be NaN. Ordering between NaN and other values is
/// undefined and the caller is responsible for keeping it out of the tree.
pub trait TurnDriver<E, S>: Send + Sync {
    /// One-time-per-turn setup. Default does nothing.
    fn init(&self, entity: &mut E, state: &mut S) {
        let _ = (entity, state);
    }

    /// Whether this driver can act this turn.
    fn is_enabled(&self, entity: &mut E, state: &mut S) -> bool;

    /// Desirability of acting. Higher wins; [`DISABLED`] means "cannot act".
    fn priority(&self, entity: &mut E, state: &mut S) -> f32;

    /// Perform the action. Returns whether an action was taken.
    fn execute(&self, entity: &mut E, state: &mut S) -> bool;
}

/// Blanket implementation for boxed drivers.
///
/// This allows `Box<dyn TurnDriver<E, S>>` to also implement `TurnDriver<E, S>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<E, S> TurnDriver<E, S> for Box<dyn TurnDriver<E, S>> {
    #[inline]
    fn init(&self, entity: &mut E, state: &mut S) {
        (**self).init(entity, state)
    }

    #[inline]
    fn is_enabled(&self, entity: &mut E, state: &mut S) -> bool {
        (**self).is_enabled(entity, state)
    }

    #[inline]
    fn priority(&self, entity: &mut E, state: &mut S) -> f32 {
        (**self).priority(entity, state)
    }

    #[inline]
    fn execute(&self, entity: &mut E, state: &mut S) -> bool {
        (**self).execute(entity, state)
    }
}
