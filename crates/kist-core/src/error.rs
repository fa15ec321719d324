//! Error types for the Kist library.
//!
//! This module defines the error types shared across the Kist crates,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Kist operations.
pub type KistResult<T> = Result<T, KistError>;

/// The main error type for Kist core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KistError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid rate value.
    #[error("Invalid rate: {value} - {reason}")]
    InvalidRate {
        /// The offending rate, in percent per annum.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid tenure value.
    #[error("Invalid tenure: {reason}")]
    InvalidTenure {
        /// Reason for invalidity.
        reason: String,
    },
}

impl KistError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidRate {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid tenure error.
    #[must_use]
    pub fn invalid_tenure(reason: impl Into<String>) -> Self {
        Self::InvalidTenure {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KistError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_rate_error_carries_value() {
        let err = KistError::invalid_rate(-1.0, "rate must be positive");
        assert!(err.to_string().contains("-1"));
        assert!(err.to_string().contains("positive"));
    }
}
