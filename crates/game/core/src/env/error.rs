//! Oracle access errors.
//!
//! Raised when simulation code references table data that was never
//! authored. The frame loop logs these and continues with a fallback.

use crate::action::{ActionId, AttackId};
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// An action id has no entry in the fighter's action table.
    #[error("{0} is not registered in the action table")]
    ActionNotFound(ActionId),

    /// An attack id has no entry in the fighter's attack table.
    #[error("{0} is not registered in the attack table")]
    AttackNotFound(AttackId),

    /// Fighter data was requested before any tables were set up.
    #[error("fighter data '{0}' has no action tables")]
    TablesNotAvailable(String),

    /// Two entries share the same id; the later one replaced the earlier.
    #[error("duplicate {0} in fighter data, keeping the last definition")]
    DuplicateAction(ActionId),

    #[error("duplicate {0} in fighter data, keeping the last definition")]
    DuplicateAttack(AttackId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            ActionNotFound(_) | AttackNotFound(_) => ErrorSeverity::Validation,
            TablesNotAvailable(_) => ErrorSeverity::Fatal,
            DuplicateAction(_) | DuplicateAttack(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ActionNotFound(_) => "ORACLE_ACTION_NOT_FOUND",
            AttackNotFound(_) => "ORACLE_ATTACK_NOT_FOUND",
            TablesNotAvailable(_) => "ORACLE_TABLES_NOT_AVAILABLE",
            DuplicateAction(_) => "ORACLE_DUPLICATE_ACTION",
            DuplicateAttack(_) => "ORACLE_DUPLICATE_ATTACK",
        }
    }
}
