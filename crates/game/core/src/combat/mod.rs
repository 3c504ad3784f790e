//! Combat resolution.
//!
//! Hit chance and damage come from composable [`CombatFormula`]s evaluated
//! against stat snapshots. [`AttackResolver`] ties them together with an
//! injected [`RandomSource`](crate::env::RandomSource). Nothing here mutates
//! entity state.

pub mod damage;
pub mod formula;
pub mod hit;
pub mod result;

pub use damage::{DamageModel, DamageRange, apply_damage};
pub use formula::{
    Clamped, CombatFormula, Constant, DistanceFalloff, FormulaInput, LevelLinear, Opposed, Scaled,
    StatLinear, Sum, WeaponStat,
};
pub use hit::{HitChanceModel, check_hit};
pub use result::{AttackOutcome, AttackRequest, AttackResolver};
