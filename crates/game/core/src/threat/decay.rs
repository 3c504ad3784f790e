//! Threat decay tunables.

use crate::config::ConfigError;
use crate::types::Position;

/// How fast threat fades per second of elapsed time.
///
/// A rate of zero disables that component.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ThreatDecay {
    /// Flat decay per second.
    pub time_rate: f32,
    /// Extra decay per second, strongest at distance zero and vanishing at
    /// `max_distance`.
    pub distance_rate: f32,
    pub max_distance: f32,
    /// Measure distance on the ground plane only.
    pub flatten: bool,
    /// Without a clear line of sight, distance decay applies at full strength.
    pub sight_gated: bool,
}

impl Default for ThreatDecay {
    fn default() -> Self {
        Self {
            time_rate: 0.0,
            distance_rate: 0.0,
            max_distance: 10.0,
            flatten: false,
            sight_gated: false,
        }
    }
}

impl ThreatDecay {
    /// Time decay only.
    pub fn over_time(rate: f32) -> Self {
        Self {
            time_rate: rate,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_distance(mut self, rate: f32, max_distance: f32) -> Self {
        self.distance_rate = rate;
        self.max_distance = max_distance;
        self
    }

    #[must_use]
    pub fn flattened(mut self) -> Self {
        self.flatten = true;
        self
    }

    #[must_use]
    pub fn sight_gated(mut self) -> Self {
        self.sight_gated = true;
        self
    }

    pub fn is_active(&self) -> bool {
        self.time_rate > 0.0 || self.distance_rate > 0.0
    }

    /// Distance between owner and source under the flattening setting.
    pub fn distance(&self, owner: Position, source: Position) -> f32 {
        if self.flatten {
            ground(owner).distance(ground(source))
        } else {
            owner.distance(source)
        }
    }

    /// Distance decay weight in `[0, 1]`: `1 - clamp01(distance / max_distance)`.
    ///
    /// A non-positive `max_distance` has no falloff, so the weight is 1.
    pub fn distance_factor(&self, distance: f32, clear_line: bool) -> f32 {
        if self.sight_gated && !clear_line {
            return 1.0;
        }
        if self.max_distance.is_nan() || self.max_distance <= 0.0 {
            return 1.0;
        }
        1.0 - (distance / self.max_distance).clamp(0.0, 1.0)
    }

    /// Total decay over `elapsed` seconds. `distance_factor` is `None` when
    /// the owner has no position, which skips distance decay.
    pub fn amount(&self, elapsed: f32, distance_factor: Option<f32>) -> f32 {
        let mut amount = self.time_rate * elapsed;
        if let Some(factor) = distance_factor.filter(|_| self.distance_rate > 0.0) {
            amount += self.distance_rate * factor * elapsed;
        }
        amount
    }

    /// Validates rates and the distance scale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for negative rates or a non-positive
    /// `max_distance`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_rate < 0.0 || self.time_rate.is_nan() {
            return Err(ConfigError::NegativeDecayRate {
                field: "time_rate",
                value: self.time_rate,
            });
        }
        if self.distance_rate < 0.0 || self.distance_rate.is_nan() {
            return Err(ConfigError::NegativeDecayRate {
                field: "distance_rate",
                value: self.distance_rate,
            });
        }
        if self.max_distance.is_nan() || self.max_distance <= 0.0 {
            return Err(ConfigError::NonPositiveMaxDistance(self.max_distance));
        }
        Ok(())
    }
}

fn ground(position: Position) -> Position {
    Position::new(position.x, 0.0, position.z)
}
