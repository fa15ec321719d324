//! Annual interest rate type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{KistError, KistResult};

/// A nominal interest rate quoted in percent per annum.
///
/// Loan rates are quoted the way lenders advertise them (e.g., 9.00 meaning
/// 9% per annum) and converted to the monthly reducing-balance rate only
/// inside the engine.
///
/// # Example
///
/// ```rust
/// use kist_core::types::AnnualRate;
///
/// let rate = AnnualRate::new(12.0);
/// assert_eq!(rate.as_percent(), 12.0);
/// assert!((rate.monthly_rate() - 0.01).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnualRate(f64);

impl AnnualRate {
    /// Creates a new rate from a percent-per-annum value.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        Self(percent)
    }

    /// Validates that the rate is strictly positive and finite.
    ///
    /// # Errors
    ///
    /// Returns `KistError::InvalidRate` otherwise.
    pub fn validate(&self) -> KistResult<()> {
        if !self.0.is_finite() || self.0 <= 0.0 {
            return Err(KistError::invalid_rate(
                self.0,
                "rate must be a positive percentage",
            ));
        }
        Ok(())
    }

    /// Returns the rate in percent per annum (as quoted).
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        self.0
    }

    /// Returns the annual rate as a decimal (9.0% -> 0.09).
    #[must_use]
    pub fn as_decimal(&self) -> f64 {
        self.0 / 100.0
    }

    /// Returns the monthly reducing-balance rate (9.0% -> 0.0075).
    #[must_use]
    pub fn monthly_rate(&self) -> f64 {
        self.0 / 12.0 / 100.0
    }
}

impl fmt::Display for AnnualRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

impl From<f64> for AnnualRate {
    fn from(percent: f64) -> Self {
        Self::new(percent)
    }
}
