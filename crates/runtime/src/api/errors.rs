//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the builder, replay persistence and content loading so
//! clients can bubble them up with consistent context.
use std::fmt;

use fight_core::{ErrorSeverity, GameError, Side};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{kind} input provider not set")]
    ProviderNotSet { kind: ProviderKind },

    #[error("runtime requires fighter data for {side} before building")]
    MissingFighter { side: Side },

    #[error("match did not finish within {frames} frames")]
    FrameBudgetExhausted { frames: u64 },

    #[error("replay log I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("replay log could not be encoded or decoded: {0}")]
    Serialization(String),

    #[error("replay log version {found} is not supported (expected {expected})")]
    UnsupportedReplayVersion { found: u32, expected: u32 },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ProviderNotSet { .. } | Self::MissingFighter { .. } => ErrorSeverity::Validation,
            Self::FrameBudgetExhausted { .. } => ErrorSeverity::Recoverable,
            Self::Io(_) | Self::Serialization(_) => ErrorSeverity::Recoverable,
            Self::UnsupportedReplayVersion { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ProviderNotSet { .. } => "RUNTIME_PROVIDER_NOT_SET",
            Self::MissingFighter { .. } => "RUNTIME_MISSING_FIGHTER",
            Self::FrameBudgetExhausted { .. } => "RUNTIME_FRAME_BUDGET_EXHAUSTED",
            Self::Io(_) => "RUNTIME_REPLAY_IO",
            Self::Serialization(_) => "RUNTIME_REPLAY_SERIALIZATION",
            Self::UnsupportedReplayVersion { .. } => "RUNTIME_REPLAY_VERSION",
        }
    }
}

/// Which seat an input provider drives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProviderKind {
    Player1,
    Player2,
}

impl ProviderKind {
    pub fn side(self) -> Side {
        match self {
            ProviderKind::Player1 => Side::P1,
            ProviderKind::Player2 => Side::P2,
        }
    }
}

impl From<Side> for ProviderKind {
    fn from(side: Side) -> Self {
        match side {
            Side::P1 => ProviderKind::Player1,
            Side::P2 => ProviderKind::Player2,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProviderKind::Player1 => "player one",
            ProviderKind::Player2 => "player two",
        };
        write!(f, "{}", label)
    }
}
