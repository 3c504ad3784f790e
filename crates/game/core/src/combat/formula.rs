//! Composable combat formulas.
//!
//! A formula is a pure function of the attack's stat snapshots. The built-in
//! variants are building blocks: games add their own by implementing
//! [`CombatFormula`], and the resolver never inspects which variant it holds.

use crate::stats::StatSnapshot;
use crate::types::StatId;

/// Everything a formula may read about one attack.
#[derive(Clone, Copy, Debug)]
pub struct FormulaInput<'a> {
    pub weapon: &'a StatSnapshot,
    pub source: &'a StatSnapshot,
    pub target: &'a StatSnapshot,
    /// Distance between attacker and destination, when a destination is known.
    pub distance: Option<f32>,
}

/// Pure numeric strategy used for hit chance and damage bounds.
pub trait CombatFormula: Send + Sync {
    fn evaluate(&self, input: &FormulaInput<'_>) -> f32;
}

impl<F: CombatFormula + ?Sized> CombatFormula for Box<F> {
    #[inline]
    fn evaluate(&self, input: &FormulaInput<'_>) -> f32 {
        (**self).evaluate(input)
    }
}

impl<F: CombatFormula + ?Sized> CombatFormula for &F {
    #[inline]
    fn evaluate(&self, input: &FormulaInput<'_>) -> f32 {
        (**self).evaluate(input)
    }
}

/// Fixed value, ignoring inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constant(pub f32);

impl CombatFormula for Constant {
    fn evaluate(&self, _input: &FormulaInput<'_>) -> f32 {
        self.0
    }
}

/// `base + source level * per_level`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelLinear {
    pub base: f32,
    pub per_level: f32,
}

impl CombatFormula for LevelLinear {
    fn evaluate(&self, input: &FormulaInput<'_>) -> f32 {
        self.base + input.source.value(StatId::LEVEL) * self.per_level
    }
}

/// `base + source[stat] * per_level`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatLinear {
    pub stat: StatId,
    pub base: f32,
    pub per_level: f32,
}

impl CombatFormula for StatLinear {
    fn evaluate(&self, input: &FormulaInput<'_>) -> f32 {
        self.base + input.source.value(self.stat) * self.per_level
    }
}

/// `base + weapon[stat] * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponStat {
    pub stat: StatId,
    pub base: f32,
    pub scale: f32,
}

impl CombatFormula for WeaponStat {
    fn evaluate(&self, input: &FormulaInput<'_>) -> f32 {
        self.base + input.weapon.value(self.stat) * self.scale
    }
}

/// `base + (source[source_stat] - target[target_stat]) * scale`.
///
/// Accuracy against evasion, power against armor, and so on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Opposed {
    pub source_stat: StatId,
    pub target_stat: StatId,
    pub base: f32,
    pub scale: f32,
}

impl CombatFormula for Opposed {
    fn evaluate(&self, input: &FormulaInput<'_>) -> f32 {
        let diff = input.source.value(self.source_stat) - input.target.value(self.target_stat);
        self.base + diff * self.scale
    }
}

/// Clamps the inner formula to `[min, max]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Clamped<F> {
    pub inner: F,
    pub min: f32,
    pub max: f32,
}

impl<F: CombatFormula> CombatFormula for Clamped<F> {
    fn evaluate(&self, input: &FormulaInput<'_>) -> f32 {
        self.inner.evaluate(input).max(self.min).min(self.max)
    }
}

/// Sum of several formulas.
#[derive(Default)]
pub struct Sum {
    pub terms: Vec<Box<dyn CombatFormula>>,
}

impl Sum {
    pub fn new(terms: Vec<Box<dyn CombatFormula>>) -> Self {
        Self { terms }
    }

    #[must_use]
    pub fn with(mut self, term: impl CombatFormula + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }
}

impl CombatFormula for Sum {
    fn evaluate(&self, input: &FormulaInput<'_>) -> f32 {
        self.terms.iter().map(|term| term.evaluate(input)).sum()
    }
}

/// Multiplies the inner formula by a constant factor.
#[derive(Clone, Debug, PartialEq)]
pub struct Scaled<F> {
    pub inner: F,
    pub factor: f32,
}

impl<F: CombatFormula> CombatFormula for Scaled<F> {
    fn evaluate(&self, input: &FormulaInput<'_>) -> f32 {
        self.inner.evaluate(input) * self.factor
    }
}

/// Scales the inner formula by `1 - clamp01(distance / range)`.
///
/// Attacks with no destination, or a non-positive range, are not scaled.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceFalloff<F> {
    pub inner: F,
    pub range: f32,
}

impl<F: CombatFormula> CombatFormula for DistanceFalloff<F> {
    fn evaluate(&self, input: &FormulaInput<'_>) -> f32 {
        let factor = match input.distance {
            Some(distance) if self.range > 0.0 => 1.0 - (distance / self.range).clamp(0.0, 1.0),
            _ => 1.0,
        };
        self.inner.evaluate(input) * factor
    }
}
