//! Oracle access errors.

use crate::error::{ErrorSeverity, RewardError};

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,
}

impl RewardError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            OracleError::ItemsNotAvailable => ErrorSeverity::Configuration,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
        }
    }
}
