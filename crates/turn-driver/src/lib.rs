//! Composable turn drivers: priority-based action selection for turn-based games.
//!
//! A driver tree is queried once per turn by the host's scheduler:
//!
//! 1. [`TurnDriver::init`] runs one-time setup on every node
//! 2. [`TurnDriver::is_enabled`] / [`TurnDriver::priority`] rank the options
//! 3. [`TurnDriver::execute`] performs the chosen action
//!
//! - **Deterministic**: ties resolve to the earliest-listed child
//! - **Stateless across turns**: all scratch data lives in the caller's turn state
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`TurnDriver`]: Core trait for all nodes (leaves are game-specific)
//! - [`Composite`]: Delegates to the best-priority enabled child
//! - Decorator nodes: [`Gated`], [`FixedPriority`]

pub mod builder;
pub mod composite;
pub mod decorator;
pub mod driver;

// Re-export core types for ergonomic API
pub use composite::{Composite, DriverSlot};
pub use decorator::{FixedPriority, Gated};
pub use driver::{DISABLED, TurnDriver, is_disabled};
