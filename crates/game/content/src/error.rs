//! Authoring errors found while validating loaded tables.

use fight_core::{ActionId, AttackId, ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// Every fighter must define the neutral stance it is reset into.
    #[error("fighter '{fighter}' does not define {action}")]
    MissingRequiredAction { fighter: String, action: ActionId },

    #[error("fighter '{fighter}': {action} has a frame count of zero")]
    EmptyAction { fighter: String, action: ActionId },

    #[error("fighter '{fighter}': {action} loops from frame {loop_from} past its end")]
    LoopOutOfRange {
        fighter: String,
        action: ActionId,
        loop_from: u32,
    },

    #[error("fighter '{fighter}': {action} uses {attack}, which is not defined")]
    UnknownAttack {
        fighter: String,
        action: ActionId,
        attack: AttackId,
    },

    #[error("fighter '{fighter}': {action} can cancel into {target}, which is not defined")]
    UnknownCancelTarget {
        fighter: String,
        action: ActionId,
        target: ActionId,
    },

    #[error("fighter '{fighter}': {attack} reacts with {action}, which is not defined")]
    UnknownReaction {
        fighter: String,
        attack: AttackId,
        action: ActionId,
    },

    #[error("fighter '{name}' was not found under {dir}")]
    FighterNotFound { name: String, dir: String },
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        use ContentError::*;
        match self {
            MissingRequiredAction { .. } | FighterNotFound { .. } => ErrorSeverity::Fatal,
            EmptyAction { .. } | LoopOutOfRange { .. } => ErrorSeverity::Validation,
            UnknownAttack { .. } | UnknownCancelTarget { .. } | UnknownReaction { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use ContentError::*;
        match self {
            MissingRequiredAction { .. } => "CONTENT_MISSING_REQUIRED_ACTION",
            EmptyAction { .. } => "CONTENT_EMPTY_ACTION",
            LoopOutOfRange { .. } => "CONTENT_LOOP_OUT_OF_RANGE",
            UnknownAttack { .. } => "CONTENT_UNKNOWN_ATTACK",
            UnknownCancelTarget { .. } => "CONTENT_UNKNOWN_CANCEL_TARGET",
            UnknownReaction { .. } => "CONTENT_UNKNOWN_REACTION",
            FighterNotFound { .. } => "CONTENT_FIGHTER_NOT_FOUND",
        }
    }
}
