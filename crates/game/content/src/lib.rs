//! Data-driven combat content and loaders.
//!
//! This crate provides loaders for the combat data files:
//! - Combat tunables (threat decay, default attack profile) via TOML
//! - Named attack profiles via RON
//!
//! Both formats deserialize straight into combat-core types; every load is
//! validated before it is handed out.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{AttackProfileRegistry, ConfigLoader, LoadResult, ProfileLoader};
