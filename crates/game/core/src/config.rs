//! Combat configuration and tunable parameters.
//!
//! Everything here is plain data that hosts load from files. Formulas are
//! described by [`FormulaSpec`] and turned into live [`CombatFormula`] trait
//! objects by [`FormulaSpec::build`].

use crate::combat::{
    AttackResolver, Clamped, CombatFormula, Constant, DamageModel, DistanceFalloff,
    HitChanceModel, LevelLinear, Opposed, Scaled, StatLinear, Sum, WeaponStat,
};
use crate::error::{ErrorSeverity, GameError};
use crate::threat::ThreatDecay;
use crate::types::StatId;

/// Errors raised by invalid tunables.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("decay rate `{field}` must be non-negative, got {value}")]
    NegativeDecayRate { field: &'static str, value: f32 },

    #[error("max distance must be positive, got {0}")]
    NonPositiveMaxDistance(f32),

    #[error("range must be positive, got {0}")]
    NonPositiveRange(f32),

    #[error("clamp bounds inverted: min {min} > max {max}")]
    InvertedClamp { min: f32, max: f32 },

    #[error("formula sum has no terms")]
    EmptySum,
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            NegativeDecayRate { .. } => "CONFIG_NEGATIVE_DECAY_RATE",
            NonPositiveMaxDistance(_) => "CONFIG_NON_POSITIVE_MAX_DISTANCE",
            NonPositiveRange(_) => "CONFIG_NON_POSITIVE_RANGE",
            InvertedClamp { .. } => "CONFIG_INVERTED_CLAMP",
            EmptySum => "CONFIG_EMPTY_SUM",
        }
    }
}

fn positive(value: f32) -> Result<(), ConfigError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ConfigError::NonPositiveRange(value));
    }
    Ok(())
}

/// Data form of the built-in combat formulas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FormulaSpec {
    Constant { value: f32 },
    LevelLinear { base: f32, per_level: f32 },
    StatLinear {
        stat: StatId,
        base: f32,
        per_level: f32,
    },
    WeaponStat { stat: StatId, base: f32, scale: f32 },
    Opposed {
        source_stat: StatId,
        target_stat: StatId,
        base: f32,
        scale: f32,
    },
    Clamped {
        inner: Box<FormulaSpec>,
        min: f32,
        max: f32,
    },
    Sum { terms: Vec<FormulaSpec> },
    Scaled {
        inner: Box<FormulaSpec>,
        factor: f32,
    },
    DistanceFalloff { inner: Box<FormulaSpec>, range: f32 },
}

impl FormulaSpec {
    pub fn constant(value: f32) -> Self {
        Self::Constant { value }
    }

    #[must_use]
    pub fn clamped(self, min: f32, max: f32) -> Self {
        Self::Clamped {
            inner: Box::new(self),
            min,
            max,
        }
    }

    /// Validates this formula and every nested one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for inverted clamps, empty sums, or
    /// non-positive falloff ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Constant { .. }
            | Self::LevelLinear { .. }
            | Self::StatLinear { .. }
            | Self::WeaponStat { .. }
            | Self::Opposed { .. } => Ok(()),
            Self::Clamped { inner, min, max } => {
                if min > max {
                    return Err(ConfigError::InvertedClamp {
                        min: *min,
                        max: *max,
                    });
                }
                inner.validate()
            }
            Self::Sum { terms } => {
                if terms.is_empty() {
                    return Err(ConfigError::EmptySum);
                }
                terms.iter().try_for_each(Self::validate)
            }
            Self::Scaled { inner, .. } => inner.validate(),
            Self::DistanceFalloff { inner, range } => {
                positive(*range)?;
                inner.validate()
            }
        }
    }

    /// Builds the live formula described here.
    pub fn build(&self) -> Box<dyn CombatFormula> {
        match self {
            Self::Constant { value } => Box::new(Constant(*value)),
            Self::LevelLinear { base, per_level } => Box::new(LevelLinear {
                base: *base,
                per_level: *per_level,
            }),
            Self::StatLinear {
                stat,
                base,
                per_level,
            } => Box::new(StatLinear {
                stat: *stat,
                base: *base,
                per_level: *per_level,
            }),
            Self::WeaponStat { stat, base, scale } => Box::new(WeaponStat {
                stat: *stat,
                base: *base,
                scale: *scale,
            }),
            Self::Opposed {
                source_stat,
                target_stat,
                base,
                scale,
            } => Box::new(Opposed {
                source_stat: *source_stat,
                target_stat: *target_stat,
                base: *base,
                scale: *scale,
            }),
            Self::Clamped { inner, min, max } => Box::new(Clamped {
                inner: inner.build(),
                min: *min,
                max: *max,
            }),
            Self::Sum { terms } => Box::new(Sum::new(terms.iter().map(Self::build).collect())),
            Self::Scaled { inner, factor } => Box::new(Scaled {
                inner: inner.build(),
                factor: *factor,
            }),
            Self::DistanceFalloff { inner, range } => Box::new(DistanceFalloff {
                inner: inner.build(),
                range: *range,
            }),
        }
    }
}

/// Data form of an [`AttackResolver`] plus the reach it applies within.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackProfile {
    pub hit_chance: FormulaSpec,
    pub damage_min: FormulaSpec,
    pub damage_max: FormulaSpec,
    /// Maximum attack distance.
    pub reach: f32,
}

impl AttackProfile {
    pub const DEFAULT_REACH: f32 = 1.5;

    /// Validates every formula and the reach.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hit_chance.validate()?;
        self.damage_min.validate()?;
        self.damage_max.validate()?;
        positive(self.reach)
    }

    pub fn resolver(&self) -> AttackResolver {
        AttackResolver::new(
            HitChanceModel::from_boxed(self.hit_chance.build()),
            DamageModel::from_boxed(self.damage_min.build(), Some(self.damage_max.build())),
        )
    }
}

impl Default for AttackProfile {
    /// Level-scaled melee swing.
    fn default() -> Self {
        Self {
            hit_chance: FormulaSpec::LevelLinear {
                base: 0.7,
                per_level: 0.02,
            }
            .clamped(0.05, 0.95),
            damage_min: FormulaSpec::constant(2.0),
            damage_max: FormulaSpec::LevelLinear {
                base: 4.0,
                per_level: 1.0,
            },
            reach: Self::DEFAULT_REACH,
        }
    }
}

/// Combat tunables loaded at startup.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CombatConfig {
    pub threat: ThreatDecay,
    pub attack: AttackProfile,
}

impl CombatConfig {
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in threat decay or the attack profile.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.threat.validate()?;
        self.attack.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{AttackRequest, FormulaInput};
    use crate::env::RandomSource;
    use crate::stats::StatSnapshot;
    use crate::types::Position;

    struct Fixed(f32);

    impl RandomSource for Fixed {
        fn next_uniform(&mut self) -> f32 {
            self.0
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CombatConfig::default().validate(), Ok(()));
    }

    #[test]
    fn nested_errors_surface() {
        let spec = FormulaSpec::Sum {
            terms: vec![FormulaSpec::constant(1.0).clamped(2.0, 1.0)],
        };
        assert_eq!(
            spec.validate(),
            Err(ConfigError::InvertedClamp { min: 2.0, max: 1.0 })
        );

        assert_eq!(
            FormulaSpec::Sum { terms: vec![] }.validate(),
            Err(ConfigError::EmptySum)
        );

        let falloff = FormulaSpec::DistanceFalloff {
            inner: Box::new(FormulaSpec::constant(1.0)),
            range: 0.0,
        };
        assert_eq!(falloff.validate(), Err(ConfigError::NonPositiveRange(0.0)));
    }

    #[test]
    fn errors_are_validation_severity() {
        let err = ConfigError::EmptySum;
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "CONFIG_EMPTY_SUM");
    }

    #[test]
    fn built_formulas_match_their_specs() {
        let accuracy = StatId(1);
        let evasion = StatId(2);
        let spec = FormulaSpec::Sum {
            terms: vec![
                FormulaSpec::Opposed {
                    source_stat: accuracy,
                    target_stat: evasion,
                    base: 0.5,
                    scale: 0.1,
                },
                FormulaSpec::Scaled {
                    inner: Box::new(FormulaSpec::constant(2.0)),
                    factor: 0.25,
                },
            ],
        };

        let source = StatSnapshot::new().with(accuracy, 4.0);
        let target = StatSnapshot::new().with(evasion, 2.0);
        let weapon = StatSnapshot::new();
        let input = FormulaInput {
            weapon: &weapon,
            source: &source,
            target: &target,
            distance: None,
        };
        let value = spec.build().evaluate(&input);
        assert!((value - 1.2).abs() < 1e-6, "value {value}");
    }

    #[test]
    fn profile_builds_a_resolver() {
        let profile = AttackProfile::default();
        let source = StatSnapshot::new().with(StatId::LEVEL, 2.0);
        let empty = StatSnapshot::new();
        let request = AttackRequest {
            weapon: &empty,
            source: &source,
            target: &empty,
            origin: Position::ZERO,
            destination: None,
        };

        let resolver = profile.resolver();
        assert!((resolver.hit_chance(&request) - 0.74).abs() < 1e-6);

        let outcome = resolver.resolve(&request, &mut Fixed(0.0));
        assert!(outcome.hit);
        assert_eq!(outcome.damage, 2.0);
    }
}
