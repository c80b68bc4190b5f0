//! Common error infrastructure for reward-core.
//!
//! This module provides the shared classification used by every error type in
//! the crate. Domain-specific errors (e.g. `RangeError`, `EntryError`) are
//! defined next to the types they validate.
//!
//! # Design Principles
//!
//! - **Absorbed at the boundary**: resolution and validity never surface these
//!   errors to callers; they are logged and turned into `false` or a fallback
//! - **Severity Classification**: errors are categorized so diagnostics can be
//!   filtered by the owning application
//! - **Stable codes**: every variant maps to a static code for logs and tests

/// Severity level of an error, used for categorization in diagnostics.
///
/// - **Configuration**: the data pack declares something the engine cannot use
/// - **Validation**: a value violates an invariant of the data model
/// - **Internal**: a pluggable handler misbehaved
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Configuration error - unknown type, missing item, empty tag.
    ///
    /// Fixing the data pack fixes the entry.
    Configuration,

    /// Validation error - malformed value such as an inverted range.
    Validation,

    /// Internal error - a handler failed or panicked.
    ///
    /// These indicate bugs in handler code and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates a bug rather than bad data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all reward-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to act on it, not by impact
pub trait RewardError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_internal_severity_is_internal() {
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Configuration.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert_eq!(ErrorSeverity::Configuration.as_str(), "configuration");
    }
}
