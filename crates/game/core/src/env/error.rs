//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when a required oracle is missing from an [`Env`](super::Env).
///
/// The engine cannot proceed without its collaborators, so these are fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// StatOracle is not available in the environment.
    #[error("StatOracle not available")]
    StatsNotAvailable,

    /// SightOracle is not available in the environment.
    #[error("SightOracle not available")]
    SightNotAvailable,

    /// PositionOracle is not available in the environment.
    #[error("PositionOracle not available")]
    PositionsNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            StatsNotAvailable => "ORACLE_STATS_NOT_AVAILABLE",
            SightNotAvailable => "ORACLE_SIGHT_NOT_AVAILABLE",
            PositionsNotAvailable => "ORACLE_POSITIONS_NOT_AVAILABLE",
        }
    }
}
