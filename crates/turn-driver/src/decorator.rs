//! Decorator driver nodes.
//!
//! Decorators wrap a single child driver and modify how it is ranked.
//! This module provides [`Gated`] (conditional enablement) and
//! [`FixedPriority`] (constant priority).

use crate::{DISABLED, TurnDriver};

/// Predicate deciding whether a gated child may act.
pub type Gate<E, S> = Box<dyn Fn(&E, &S) -> bool + Send + Sync>;

/// Enables its child only while a predicate holds.
///
/// # Semantics
///
/// - Enabled iff the predicate returns `true` **and** the child is enabled
/// - Priority and execution are the child's own
/// - When the gate is closed, priority is [`DISABLED`] and execute is a no-op
pub struct Gated<E, S> {
    gate: Gate<E, S>,
    child: Box<dyn TurnDriver<E, S>>,
}

impl<E, S> Gated<E, S> {
    /// Wraps `child` behind `gate`.
    pub fn new(gate: Gate<E, S>, child: Box<dyn TurnDriver<E, S>>) -> Self {
        Self { gate, child }
    }

    fn open(&self, entity: &E, state: &S) -> bool {
        (self.gate)(entity, state)
    }
}

impl<E, S> TurnDriver<E, S> for Gated<E, S> {
    fn init(&self, entity: &mut E, state: &mut S) {
        self.child.init(entity, state);
    }

    fn is_enabled(&self, entity: &mut E, state: &mut S) -> bool {
        self.open(entity, state) && self.child.is_enabled(entity, state)
    }

    fn priority(&self, entity: &mut E, state: &mut S) -> f32 {
        if self.open(entity, state) {
            self.child.priority(entity, state)
        } else {
            DISABLED
        }
    }

    fn execute(&self, entity: &mut E, state: &mut S) -> bool {
        self.open(entity, state) && self.child.execute(entity, state)
    }
}

/// Reports a constant priority while its child is enabled.
///
/// Useful for ranking leaves that have no natural priority of their own.
pub struct FixedPriority<E, S> {
    priority: f32,
    child: Box<dyn TurnDriver<E, S>>,
}

impl<E, S> FixedPriority<E, S> {
    /// Wraps `child`, overriding its priority with `priority`.
    pub fn new(priority: f32, child: Box<dyn TurnDriver<E, S>>) -> Self {
        Self { priority, child }
    }
}

impl<E, S> TurnDriver<E, S> for FixedPriority<E, S> {
    fn init(&self, entity: &mut E, state: &mut S) {
        self.child.init(entity, state);
    }

    fn is_enabled(&self, entity: &mut E, state: &mut S) -> bool {
        self.child.is_enabled(entity, state)
    }

    fn priority(&self, entity: &mut E, state: &mut S) -> f32 {
        if self.child.is_enabled(entity, state) {
            self.priority
        } else {
            DISABLED
        }
    }

    fn execute(&self, entity: &mut E, state: &mut S) -> bool {
        self.child.execute(entity, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Health(i32);

    #[derive(Default)]
    struct Log {
        actions: u32,
    }

    struct Act(f32);
    impl TurnDriver<Health, Log> for Act {
        fn is_enabled(&self, _entity: &mut Health, _state: &mut Log) -> bool {
            true
        }

        fn priority(&self, _entity: &mut Health, _state: &mut Log) -> f32 {
            self.0
        }

        fn execute(&self, _entity: &mut Health, state: &mut Log) -> bool {
            state.actions += 1;
            true
        }
    }

    fn low_health() -> Gate<Health, Log> {
        Box::new(|entity: &Health, _state: &Log| entity.0 < 10)
    }

    #[test]
    fn gate_open_passes_through() {
        let gated = Gated::new(low_health(), Box::new(Act(4.0)));

        let mut entity = Health(3);
        let mut log = Log::default();
        assert!(gated.is_enabled(&mut entity, &mut log));
        assert_eq!(gated.priority(&mut entity, &mut log), 4.0);
        assert!(gated.execute(&mut entity, &mut log));
        assert_eq!(log.actions, 1);
    }

    #[test]
    fn gate_closed_blocks_child() {
        let gated = Gated::new(low_health(), Box::new(Act(4.0)));

        let mut entity = Health(50);
        let mut log = Log::default();
        assert!(!gated.is_enabled(&mut entity, &mut log));
        assert_eq!(gated.priority(&mut entity, &mut log), DISABLED);
        assert!(!gated.execute(&mut entity, &mut log));
        assert_eq!(log.actions, 0);
    }

    #[test]
    fn fixed_priority_overrides_child() {
        let fixed = FixedPriority::new(12.0, Box::new(Act(1.0)));

        let mut log = Log::default();
        assert_eq!(fixed.priority(&mut Health(1), &mut log), 12.0);
        assert!(fixed.execute(&mut Health(1), &mut log));
        assert_eq!(log.actions, 1);
    }

    #[test]
    fn fixed_priority_respects_disabled_child() {
        let fixed =
            FixedPriority::new(12.0, Box::new(Gated::new(low_health(), Box::new(Act(1.0)))));

        let mut log = Log::default();
        assert!(!fixed.is_enabled(&mut Health(40), &mut log));
        assert_eq!(fixed.priority(&mut Health(40), &mut log), DISABLED);
    }
}
