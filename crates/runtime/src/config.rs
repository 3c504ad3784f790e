//! Runtime configuration structures and loaders.
use std::env;
use std::str::FromStr;

/// Tunables for driving an encounter.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Base seed; every turn derives its own stream from it.
    pub seed: u64,
    /// Simulated seconds per round, fed to threat decay.
    pub turn_seconds: f32,
    pub max_rounds: u64,
    /// Threat a victim gains on its attacker per point of damage taken.
    pub threat_per_damage: f32,
    /// Threat a target gains on an attacker that missed it.
    pub threat_on_miss: f32,
    /// Threat every actor starts with toward each hostile actor.
    pub initial_threat: f32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            turn_seconds: 1.0,
            max_rounds: 100,
            threat_per_damage: 1.0,
            threat_on_miss: 0.5,
            initial_threat: 5.0,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COMBAT_SEED` - Base RNG seed (default: 0x5eed)
    /// - `COMBAT_TURN_SECONDS` - Seconds per round (default: 1.0)
    /// - `COMBAT_MAX_ROUNDS` - Round limit for `Arena::run` (default: 100)
    /// - `COMBAT_THREAT_PER_DAMAGE` - Threat per damage point (default: 1.0)
    /// - `COMBAT_THREAT_ON_MISS` - Threat from a miss (default: 0.5)
    /// - `COMBAT_INITIAL_THREAT` - Starting threat between hostiles (default: 5.0)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from `lookup(key)` using the same keys as
    /// [`from_env`](Self::from_env).
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed) = read_var::<u64>(&lookup, "COMBAT_SEED") {
            config.seed = seed;
        }
        if let Some(seconds) = read_var::<f32>(&lookup, "COMBAT_TURN_SECONDS") {
            config.turn_seconds = seconds.max(0.0);
        }
        if let Some(rounds) = read_var::<u64>(&lookup, "COMBAT_MAX_ROUNDS") {
            config.max_rounds = rounds.max(1);
        }
        if let Some(threat) = read_var::<f32>(&lookup, "COMBAT_THREAT_PER_DAMAGE") {
            config.threat_per_damage = threat;
        }
        if let Some(threat) = read_var::<f32>(&lookup, "COMBAT_THREAT_ON_MISS") {
            config.threat_on_miss = threat;
        }
        if let Some(threat) = read_var::<f32>(&lookup, "COMBAT_INITIAL_THREAT") {
            config.initial_threat = threat;
        }

        config
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u64) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}
