//! Composite driver nodes.
//!
//! A [`Composite`] owns an ordered list of child slots and delegates each turn
//! to the child with the highest priority. Nesting composites builds decision
//! trees of arbitrary depth.

use crate::{DISABLED, TurnDriver};

/// One configured child of a [`Composite`].
///
/// A slot may be switched off at configuration time (`enabled == false`) or
/// left without a driver (a partially-configured tree). Either way the slot is
/// skipped during selection and never compared.
pub struct DriverSlot<E, S> {
    driver: Option<Box<dyn TurnDriver<E, S>>>,
    enabled: bool,
}

impl<E, S> DriverSlot<E, S> {
    /// An enabled slot holding `driver`.
    pub fn new(driver: Box<dyn TurnDriver<E, S>>) -> Self {
        Self {
            driver: Some(driver),
            enabled: true,
        }
    }

    /// A slot with no driver. Always skipped.
    pub fn empty() -> Self {
        Self {
            driver: None,
            enabled: true,
        }
    }

    /// Sets the config-level enabled flag (builder pattern).
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Config-level enabled flag.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The driver, if one is configured.
    pub fn driver(&self) -> Option<&dyn TurnDriver<E, S>> {
        self.driver.as_deref()
    }

    /// The driver if the slot participates in selection.
    fn candidate(&self) -> Option<&dyn TurnDriver<E, S>> {
        if self.enabled { self.driver() } else { None }
    }
}

/// Delegates to the best-priority enabled child.
///
/// # Semantics
///
/// - **Enabled**: at least one participating child reports `is_enabled`
/// - **Priority**: best enabled child's priority plus `bias`, or [`DISABLED`]
/// - **Execute**: re-selects the best child (state may have changed since
///   `priority` was queried) and delegates; `false` if nothing is eligible
///
/// # Tie-break
///
/// Children are scanned in list order and only a strictly greater priority
/// replaces the current best. The earliest-listed child with the maximum
/// priority wins, so list order is precedence.
pub struct Composite<E, S> {
    slots: Vec<DriverSlot<E, S>>,
    bias: f32,
}

impl<E, S> Composite<E, S> {
    /// Creates an empty composite with zero bias.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            bias: 0.0,
        }
    }

    /// Creates a composite from enabled child drivers.
    pub fn from_children(children: Vec<Box<dyn TurnDriver<E, S>>>) -> Self {
        Self {
            slots: children.into_iter().map(DriverSlot::new).collect(),
            bias: 0.0,
        }
    }

    /// Sets the priority bias added to the winning child's priority.
    #[must_use]
    pub fn with_bias(mut self, bias: f32) -> Self {
        self.bias = bias;
        self
    }

    /// Appends an enabled child.
    #[must_use]
    pub fn with_child(mut self, driver: Box<dyn TurnDriver<E, S>>) -> Self {
        self.slots.push(DriverSlot::new(driver));
        self
    }

    /// Appends an arbitrary slot.
    pub fn push_slot(&mut self, slot: DriverSlot<E, S>) {
        self.slots.push(slot);
    }

    /// Toggles the config-level enabled flag of the slot at `index`.
    ///
    /// Returns `false` if there is no such slot.
    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Configured priority bias.
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Number of slots, including empty and disabled ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slots are configured.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Finds the winning child and its (unbiased) priority.
    ///
    /// Returns `None` when no child is eligible.
    pub fn best_child(&self, entity: &mut E, state: &mut S) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;

        for (index, slot) in self.slots.iter().enumerate() {
            let Some(driver) = slot.candidate() else {
                continue;
            };
            if !driver.is_enabled(entity, state) {
                continue;
            }

            let priority = driver.priority(entity, state);
            match best {
                // Equal priority keeps the earlier child
                Some((_, current)) if priority <= current => {}
                _ => best = Some((index, priority)),
            }
        }

        best
    }
}

impl<E, S> Default for Composite<E, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, S> TurnDriver<E, S> for Composite<E, S> {
    fn init(&self, entity: &mut E, state: &mut S) {
        // Forward to every configured child, enabled or not
        for driver in self.slots.iter().filter_map(DriverSlot::driver) {
            driver.init(entity, state);
        }
    }

    fn is_enabled(&self, entity: &mut E, state: &mut S) -> bool {
        self.slots
            .iter()
            .filter_map(DriverSlot::candidate)
            .any(|driver| driver.is_enabled(entity, state))
    }

    fn priority(&self, entity: &mut E, state: &mut S) -> f32 {
        match self.best_child(entity, state) {
            Some((_, priority)) => priority + self.bias,
            None => DISABLED,
        }
    }

    fn execute(&self, entity: &mut E, state: &mut S) -> bool {
        let Some((index, _)) = self.best_child(entity, state) else {
            return false;
        };

        self.slots[index]
            .driver()
            .is_some_and(|driver| driver.execute(entity, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestState {
        executed: Vec<u32>,
        inits: u32,
        boost: f32,
    }

    struct Unit;

    struct Fixed {
        id: u32,
        priority: f32,
        enabled: bool,
    }

    impl Fixed {
        fn boxed(id: u32, priority: f32) -> Box<dyn TurnDriver<Unit, TestState>> {
            Box::new(Self {
                id,
                priority,
                enabled: true,
            })
        }

        fn off(id: u32, priority: f32) -> Box<dyn TurnDriver<Unit, TestState>> {
            Box::new(Self {
                id,
                priority,
                enabled: false,
            })
        }
    }

    impl TurnDriver<Unit, TestState> for Fixed {
        fn init(&self, _entity: &mut Unit, state: &mut TestState) {
            state.inits += 1;
        }

        fn is_enabled(&self, _entity: &mut Unit, _state: &mut TestState) -> bool {
            self.enabled
        }

        fn priority(&self, _entity: &mut Unit, _state: &mut TestState) -> f32 {
            self.priority
        }

        fn execute(&self, _entity: &mut Unit, state: &mut TestState) -> bool {
            state.executed.push(self.id);
            true
        }
    }

    /// Priority grows with `state.boost`, to observe re-selection on execute.
    struct Boosted {
        id: u32,
    }

    impl TurnDriver<Unit, TestState> for Boosted {
        fn is_enabled(&self, _entity: &mut Unit, _state: &mut TestState) -> bool {
            true
        }

        fn priority(&self, _entity: &mut Unit, state: &mut TestState) -> f32 {
            state.boost
        }

        fn execute(&self, _entity: &mut Unit, state: &mut TestState) -> bool {
            state.executed.push(self.id);
            true
        }
    }

    #[test]
    fn first_listed_maximum_wins_ties() {
        let composite = Composite::from_children(vec![
            Fixed::boxed(0, 3.0),
            Fixed::boxed(1, 5.0),
            Fixed::boxed(2, 5.0),
            Fixed::boxed(3, 1.0),
        ]);

        let mut state = TestState::default();
        assert_eq!(composite.priority(&mut Unit, &mut state), 5.0);

        for _ in 0..10 {
            assert!(composite.execute(&mut Unit, &mut state));
        }
        assert_eq!(state.executed, vec![1; 10]);
    }

    #[test]
    fn all_children_disabled_disables_composite() {
        let composite =
            Composite::from_children(vec![Fixed::off(0, 3.0), Fixed::off(1, 9.0)]);

        let mut state = TestState::default();
        assert!(!composite.is_enabled(&mut Unit, &mut state));
        assert_eq!(composite.priority(&mut Unit, &mut state), DISABLED);
        assert!(!composite.execute(&mut Unit, &mut state));
        assert!(state.executed.is_empty());
    }

    #[test]
    fn empty_and_switched_off_slots_are_skipped() {
        let mut composite = Composite::new();
        composite.push_slot(DriverSlot::empty());
        composite.push_slot(DriverSlot::new(Fixed::boxed(1, 100.0)).with_enabled(false));
        composite.push_slot(DriverSlot::new(Fixed::boxed(2, 4.0)));

        let mut state = TestState::default();
        assert!(composite.is_enabled(&mut Unit, &mut state));
        assert_eq!(composite.best_child(&mut Unit, &mut state), Some((2, 4.0)));
        assert!(composite.execute(&mut Unit, &mut state));
        assert_eq!(state.executed, vec![2]);
    }

    #[test]
    fn bias_is_added_to_winner() {
        let children = vec![Fixed::boxed(0, 2.0), Fixed::boxed(1, 6.0)];
        let composite = Composite::from_children(children).with_bias(1.5);

        let mut state = TestState::default();
        assert_eq!(composite.priority(&mut Unit, &mut state), 7.5);
    }

    #[test]
    fn disabled_sentinel_is_not_biased() {
        let composite = Composite::from_children(vec![Fixed::off(0, 2.0)]).with_bias(10.0);

        let mut state = TestState::default();
        assert_eq!(composite.priority(&mut Unit, &mut state), DISABLED);
    }

    #[test]
    fn init_reaches_every_configured_child() {
        let mut composite = Composite::new();
        composite.push_slot(DriverSlot::new(Fixed::boxed(0, 1.0)));
        composite.push_slot(DriverSlot::new(Fixed::off(1, 1.0)));
        composite.push_slot(DriverSlot::new(Fixed::boxed(2, 1.0)).with_enabled(false));
        composite.push_slot(DriverSlot::empty());

        let mut state = TestState::default();
        composite.init(&mut Unit, &mut state);
        assert_eq!(state.inits, 3);
    }

    #[test]
    fn execute_reselects_with_current_state() {
        let composite = Composite::from_children(vec![
            Fixed::boxed(0, 5.0),
            Box::new(Boosted { id: 1 }),
        ]);

        let mut state = TestState::default();
        assert_eq!(composite.best_child(&mut Unit, &mut state), Some((0, 5.0)));

        state.boost = 8.0;
        assert!(composite.execute(&mut Unit, &mut state));
        assert_eq!(state.executed, vec![1]);
    }

    #[test]
    fn nested_composites_propagate_priority() {
        let inner = Composite::from_children(vec![Fixed::boxed(10, 4.0)]).with_bias(3.0);
        let outer = Composite::from_children(vec![Fixed::boxed(0, 6.0), Box::new(inner)]);

        let mut state = TestState::default();
        assert_eq!(outer.priority(&mut Unit, &mut state), 7.0);
        assert!(outer.execute(&mut Unit, &mut state));
        assert_eq!(state.executed, vec![10]);
    }

    #[test]
    fn set_enabled_toggles_slot() {
        let mut composite = Composite::from_children(vec![Fixed::boxed(0, 1.0)]);
        let mut state = TestState::default();

        assert!(composite.set_enabled(0, false));
        assert!(!composite.is_enabled(&mut Unit, &mut state));
        assert!(!composite.set_enabled(5, true));
    }
}
