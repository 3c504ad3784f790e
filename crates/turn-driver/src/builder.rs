//! Builder utilities for ergonomic driver tree construction.
//!
//! Instead of writing verbose `Box::new(Composite::from_children(vec![...]))`,
//! you can use shorter functions like `composite(vec![...])`.

use crate::decorator::Gate;
use crate::{Composite, FixedPriority, Gated, TurnDriver};

/// Creates a composite node with zero bias.
///
/// Shorthand for `Box::new(Composite::from_children(children))`.
#[inline]
pub fn composite<E: 'static, S: 'static>(
    children: Vec<Box<dyn TurnDriver<E, S>>>,
) -> Box<dyn TurnDriver<E, S>> {
    Box::new(Composite::from_children(children))
}

/// Creates a composite node with a priority bias.
#[inline]
pub fn biased<E: 'static, S: 'static>(
    bias: f32,
    children: Vec<Box<dyn TurnDriver<E, S>>>,
) -> Box<dyn TurnDriver<E, S>> {
    Box::new(Composite::from_children(children).with_bias(bias))
}

/// Creates a gated node.
///
/// Shorthand for `Box::new(Gated::new(Box::new(gate), child))`.
#[inline]
pub fn gated<E: 'static, S: 'static>(
    gate: impl Fn(&E, &S) -> bool + Send + Sync + 'static,
    child: Box<dyn TurnDriver<E, S>>,
) -> Box<dyn TurnDriver<E, S>> {
    let gate: Gate<E, S> = Box::new(gate);
    Box::new(Gated::new(gate, child))
}

/// Creates a fixed-priority node.
///
/// Shorthand for `Box::new(FixedPriority::new(priority, child))`.
#[inline]
pub fn fixed_priority<E: 'static, S: 'static>(
    priority: f32,
    child: Box<dyn TurnDriver<E, S>>,
) -> Box<dyn TurnDriver<E, S>> {
    Box::new(FixedPriority::new(priority, child))
}
