//! Error types for the amortization engine.

use kist_core::KistError;
use thiserror::Error;

/// A specialized Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while building a schedule.
///
/// The engine has exactly one semantic failure mode: loan terms whose
/// principal, rate, or period count is not strictly positive. A failed
/// call produces no rows and no summary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Loan terms fail validation.
    #[error("Invalid loan terms: {field} - {reason}")]
    InvalidTerms {
        /// The offending input field.
        field: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Missing required field when building terms.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Date arithmetic failed while laying out due dates.
    #[error("Date error: {0}")]
    Date(#[from] KistError),
}

impl EngineError {
    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTerms {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_terms_display() {
        let err = EngineError::invalid_terms("principal", "must be positive");
        assert!(err.to_string().contains("principal"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_core_error_passthrough() {
        let err: EngineError = KistError::invalid_date("out of range").into();
        assert!(err.to_string().contains("out of range"));
    }
}
