//! Hit chance model.

use super::formula::{CombatFormula, FormulaInput};

/// Probability that an attack connects, in `[0, 1]`.
pub struct HitChanceModel {
    formula: Box<dyn CombatFormula>,
}

impl HitChanceModel {
    pub fn new(formula: impl CombatFormula + 'static) -> Self {
        Self::from_boxed(Box::new(formula))
    }

    pub fn from_boxed(formula: Box<dyn CombatFormula>) -> Self {
        Self { formula }
    }

    /// Evaluates the formula and clamps the result to `[0, 1]`.
    pub fn chance(&self, input: &FormulaInput<'_>) -> f32 {
        self.formula.evaluate(input).clamp(0.0, 1.0)
    }
}

/// Check a uniform roll in `[0, 1)` against a hit chance.
///
/// A chance of `1.0` always hits and `0.0` never does.
#[inline]
pub fn check_hit(chance: f32, roll: f32) -> bool {
    roll < chance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::formula::Constant;
    use crate::stats::StatSnapshot;

    #[test]
    fn chance_is_clamped_to_probability() {
        let empty = StatSnapshot::new();
        let input = FormulaInput {
            weapon: &empty,
            source: &empty,
            target: &empty,
            distance: None,
        };

        assert_eq!(HitChanceModel::new(Constant(1.7)).chance(&input), 1.0);
        assert_eq!(HitChanceModel::new(Constant(-0.2)).chance(&input), 0.0);
        assert_eq!(HitChanceModel::new(Constant(0.35)).chance(&input), 0.35);
    }

    #[test]
    fn bounds_are_certain() {
        assert!(check_hit(1.0, 0.0));
        assert!(check_hit(1.0, 0.999));
        assert!(!check_hit(0.0, 0.0));
        assert!(!check_hit(0.5, 0.5));
    }
}
