//! Unified error types surfaced by the runtime API.
//!
//! Turn evaluation itself never fails; these cover assembly mistakes such as
//! driving an actor that does not exist or has no driver tree.
use combat_core::{ConfigError, EntityId, ErrorSeverity, GameError, OracleError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("entity {0} is not alive in this encounter")]
    UnknownEntity(EntityId),

    #[error("no driver tree assigned to {0}")]
    MissingDriver(EntityId),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::Config(err) => err.severity(),
            Self::UnknownEntity(_) => ErrorSeverity::Validation,
            Self::MissingDriver(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::Config(err) => err.error_code(),
            Self::UnknownEntity(_) => "RUNTIME_UNKNOWN_ENTITY",
            Self::MissingDriver(_) => "RUNTIME_MISSING_DRIVER",
        }
    }
}
