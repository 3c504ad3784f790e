//! Threat (aggro) tracking.
//!
//! Each entity owns a [`ThreatTable`] of hostility scores toward potential
//! targets. Scores decay over time and with distance, optionally gated by
//! line of sight, and are ranked on demand for targeting.

mod decay;
mod table;

pub use decay::ThreatDecay;
pub use table::{ThreatEntry, ThreatTable};
