//! Damage model and application.

use super::formula::{CombatFormula, FormulaInput};

/// Inclusive damage interval produced by a [`DamageModel`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRange {
    pub min: f32,
    pub max: f32,
}

impl DamageRange {
    /// Builds a range, swapping inverted bounds and flooring both at zero.
    pub fn new(a: f32, b: f32) -> Self {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Self {
            min: min.max(0.0),
            max: max.max(0.0),
        }
    }

    pub fn fixed(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Damage at position `t` in `[0, 1]` along the range.
    pub fn sample(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t.clamp(0.0, 1.0)
    }

    pub fn mean(&self) -> f32 {
        self.sample(0.5)
    }
}

/// Pair of formulas bounding the damage of a connecting attack.
pub struct DamageModel {
    min: Box<dyn CombatFormula>,
    max: Option<Box<dyn CombatFormula>>,
}

impl DamageModel {
    pub fn new(min: impl CombatFormula + 'static, max: impl CombatFormula + 'static) -> Self {
        Self::from_boxed(Box::new(min), Some(Box::new(max)))
    }

    /// Damage that does not vary: both bounds come from `formula`.
    pub fn fixed(formula: impl CombatFormula + 'static) -> Self {
        Self::from_boxed(Box::new(formula), None)
    }

    pub fn from_boxed(min: Box<dyn CombatFormula>, max: Option<Box<dyn CombatFormula>>) -> Self {
        Self { min, max }
    }

    pub fn range(&self, input: &FormulaInput<'_>) -> DamageRange {
        let min = self.min.evaluate(input);
        let max = self.max.as_ref().map_or(min, |max| max.evaluate(input));
        DamageRange::new(min, max)
    }
}

/// Apply damage to a health pool, never going below zero.
///
/// Negative damage is ignored rather than healing.
#[inline]
pub fn apply_damage(current: f32, damage: f32) -> f32 {
    (current - damage.max(0.0)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::formula::{Constant, LevelLinear};
    use crate::stats::StatSnapshot;
    use crate::types::StatId;

    #[test]
    fn range_swaps_and_floors() {
        assert_eq!(DamageRange::new(9.0, 3.0), DamageRange { min: 3.0, max: 9.0 });
        assert_eq!(DamageRange::new(-4.0, 2.0), DamageRange { min: 0.0, max: 2.0 });
    }

    #[test]
    fn sample_interpolates() {
        let range = DamageRange::new(2.0, 6.0);

        assert_eq!(range.sample(0.0), 2.0);
        assert_eq!(range.sample(0.25), 3.0);
        assert_eq!(range.sample(1.0), 6.0);
        assert_eq!(range.mean(), 4.0);
    }

    #[test]
    fn model_evaluates_both_bounds() {
        let weapon = StatSnapshot::new();
        let source = StatSnapshot::new().with(StatId::LEVEL, 3.0);
        let input = FormulaInput {
            weapon: &weapon,
            source: &source,
            target: &weapon,
            distance: None,
        };
        let level = LevelLinear {
            base: 1.0,
            per_level: 2.0,
        };

        let model = DamageModel::new(Constant(2.0), level);
        assert_eq!(model.range(&input), DamageRange::new(2.0, 7.0));
        assert_eq!(DamageModel::fixed(Constant(5.0)).range(&input), DamageRange::fixed(5.0));
    }

    #[test]
    fn apply_damage_saturates() {
        assert_eq!(apply_damage(10.0, 4.0), 6.0);
        assert_eq!(apply_damage(3.0, 8.0), 0.0);
        assert_eq!(apply_damage(5.0, -2.0), 5.0);
    }
}
