//! Reference host for the combat core.
//!
//! This crate wires a concrete world, threat tables, and driver trees into a
//! synchronous turn loop. Games embed [`Arena`] to run encounters, or reuse
//! the pieces individually:
//! - [`world`] holds actors and items and implements every oracle
//! - [`encounter`] pairs the world with per-actor threat tables
//! - [`drivers`] provides leaf drivers and preset trees
//! - [`runner`] runs one turn through a tree with a seeded RNG
//! - [`arena`] loops rounds and applies the recorded decisions
pub mod arena;
pub mod config;
pub mod drivers;
pub mod encounter;
pub mod error;
pub mod runner;
pub mod turn;
pub mod world;

pub use arena::{Arena, ArenaOutcome, RoundReport, TurnSummary, decide};
pub use config::RuntimeConfig;
pub use drivers::{ApproachDriver, AttackDriver, DriverTree, RetreatDriver, WaitDriver, presets};
pub use encounter::Encounter;
pub use error::{Result, RuntimeError};
pub use runner::{TurnReport, TurnRunner};
pub use turn::{TurnRecord, TurnState};
pub use world::{Actor, Faction, Occluder, World};
