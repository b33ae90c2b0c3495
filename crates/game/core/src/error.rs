//! Common error infrastructure for fight-core.
//!
//! Domain-specific errors (e.g. [`crate::env::OracleError`]) are defined next to
//! the code that raises them. None of them stop the simulation: the frame loop
//! logs the error and falls back to a safe default, so severity is used to pick
//! the log level rather than a recovery strategy.

/// Severity level of an error.
///
/// - **Recoverable**: the frame continues with a documented fallback
/// - **Validation**: the data or request is invalid and is ignored
/// - **Internal**: simulation state is inconsistent and should be investigated
/// - **Fatal**: a required collaborator is missing; the dependent feature is inert
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an authoring bug or broken wiring.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all fight-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by how the frame loop degrades, not by impact
/// - Give every variant a stable `error_code` for log filtering and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Emits this error through `tracing` at a level matching its severity.
    fn log(&self) {
        match self.severity() {
            ErrorSeverity::Recoverable => {
                tracing::debug!(code = self.error_code(), "{}", self)
            }
            ErrorSeverity::Validation => tracing::warn!(code = self.error_code(), "{}", self),
            ErrorSeverity::Internal | ErrorSeverity::Fatal => {
                tracing::error!(code = self.error_code(), "{}", self)
            }
        }
    }
}
