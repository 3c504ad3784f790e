//! Turn-resolution and combat math for RPG hosts.
//!
//! `combat-core` is a pure library: it reads world data through the oracle
//! traits in [`env`], aggregates equipment into [`stats::StatSnapshot`]s,
//! resolves attacks with composable [`combat`] formulas, and ranks targets
//! with per-entity [`threat`] tables. It performs no I/O, holds no global
//! state, and draws randomness only from an injected
//! [`RandomSource`](env::RandomSource).
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod stats;
pub mod threat;
pub mod types;

pub use combat::{
    AttackOutcome, AttackRequest, AttackResolver, CombatFormula, DamageModel, DamageRange,
    FormulaInput, HitChanceModel, apply_damage,
};
pub use config::{AttackProfile, CombatConfig, ConfigError, FormulaSpec};
pub use env::{
    Env, GameEnv, OpenSight, OracleError, PcgRng, PositionOracle, RandomSource, SightOracle,
    StatOracle, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use stats::{AggregationMode, Aggregator, EquipmentStat, StatSnapshot, aggregate, equipped_stat};
pub use threat::{ThreatDecay, ThreatEntry, ThreatTable};
pub use types::{EntityId, ItemRef, Position, StatId};
