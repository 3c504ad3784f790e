//! Traits describing the collaborators the combat core reads from.
//!
//! Oracles expose per-entity stats, equipped items, positions, and
//! line-of-sight. The [`Env`] aggregate bundles the shared ones so hosts can
//! hand the core everything it needs without coupling to concrete worlds.
//! Randomness is not bundled: a [`RandomSource`] is mutable per-resolution
//! state and is passed explicitly.
mod error;
mod positions;
mod rng;
mod sight;
mod stats;

pub use error::OracleError;
pub use positions::PositionOracle;
pub use rng::{PcgRng, RandomSource, compute_seed};
pub use sight::{OpenSight, SightOracle};
pub use stats::StatOracle;

/// Aggregates read-only oracles consulted during targeting and resolution.
pub struct Env<'a, S, L, P>
where
    S: StatOracle + ?Sized,
    L: SightOracle + ?Sized,
    P: PositionOracle + ?Sized,
{
    stats: Option<&'a S>,
    sight: Option<&'a L>,
    positions: Option<&'a P>,
}

impl<S, L, P> Clone for Env<'_, S, L, P>
where
    S: StatOracle + ?Sized,
    L: SightOracle + ?Sized,
    P: PositionOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

// Only references are held, so the bundle is Copy even over trait objects.
impl<S, L, P> Copy for Env<'_, S, L, P>
where
    S: StatOracle + ?Sized,
    L: SightOracle + ?Sized,
    P: PositionOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<'a, dyn StatOracle + 'a, dyn SightOracle + 'a, dyn PositionOracle + 'a>;

impl<'a, S, L, P> Env<'a, S, L, P>
where
    S: StatOracle + ?Sized,
    L: SightOracle + ?Sized,
    P: PositionOracle + ?Sized,
{
    pub fn new(stats: Option<&'a S>, sight: Option<&'a L>, positions: Option<&'a P>) -> Self {
        Self {
            stats,
            sight,
            positions,
        }
    }

    pub fn with_all(stats: &'a S, sight: &'a L, positions: &'a P) -> Self {
        Self::new(Some(stats), Some(sight), Some(positions))
    }

    pub fn empty() -> Self {
        Self {
            stats: None,
            sight: None,
            positions: None,
        }
    }

    /// Returns the StatOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::StatsNotAvailable` if no stat oracle was provided.
    pub fn stats(&self) -> Result<&'a S, OracleError> {
        self.stats.ok_or(OracleError::StatsNotAvailable)
    }

    /// Returns the SightOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SightNotAvailable` if no sight oracle was provided.
    pub fn sight(&self) -> Result<&'a L, OracleError> {
        self.sight.ok_or(OracleError::SightNotAvailable)
    }

    /// Returns the PositionOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PositionsNotAvailable` if no position oracle was provided.
    pub fn positions(&self) -> Result<&'a P, OracleError> {
        self.positions.ok_or(OracleError::PositionsNotAvailable)
    }
}

impl<'a, S, L, P> Env<'a, S, L, P>
where
    S: StatOracle + 'a,
    L: SightOracle + 'a,
    P: PositionOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv` (consumes self).
    pub fn into_game_env(self) -> GameEnv<'a> {
        self.as_game_env()
    }

    /// Converts this environment into a trait-object based `GameEnv` (borrows self).
    ///
    /// Use this when you need to convert multiple times (e.g., in a loop).
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let stats: Option<&'a dyn StatOracle> = self.stats.map(|stats| stats as _);
        let sight: Option<&'a dyn SightOracle> = self.sight.map(|sight| sight as _);
        let positions: Option<&'a dyn PositionOracle> =
            self.positions.map(|positions| positions as _);
        Env::new(stats, sight, positions)
    }
}
