//! Loan tenure type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{KistError, KistResult};

/// A loan repayment duration, stored as a whole number of months.
///
/// Tenure is entered in either months or years in the widget; years are
/// converted to the nearest whole month (2.5 years -> 30 months) so the
/// schedule always has an integral number of installments.
///
/// # Example
///
/// ```rust
/// use kist_core::types::Tenure;
///
/// let tenure = Tenure::from_years(2.5);
/// assert_eq!(tenure.months(), 30);
/// assert!((tenure.years() - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tenure(u32);

impl Tenure {
    /// Creates a tenure from a whole number of months.
    #[must_use]
    pub fn from_months(months: u32) -> Self {
        Self(months)
    }

    /// Creates a tenure from a number of years, rounded to the nearest month.
    #[must_use]
    pub fn from_years(years: f64) -> Self {
        let months = (years * 12.0).round().max(0.0) as u32;
        Self(months)
    }

    /// Validates that the tenure covers at least one installment.
    ///
    /// # Errors
    ///
    /// Returns `KistError::InvalidTenure` if the tenure is zero months.
    pub fn validate(&self) -> KistResult<()> {
        if self.0 == 0 {
            return Err(KistError::invalid_tenure(
                "tenure must be at least one month",
            ));
        }
        Ok(())
    }

    /// Returns the number of monthly installments.
    #[must_use]
    pub fn months(&self) -> u32 {
        self.0
    }

    /// Returns the tenure in years as an exact fraction (months / 12).
    ///
    /// Two-decimal rounding for display is a presentation concern.
    #[must_use]
    pub fn years(&self) -> f64 {
        f64::from(self.0) / 12.0
    }
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.0)
    }
}

impl From<u32> for Tenure {
    fn from(months: u32) -> Self {
        Self::from_months(months)
    }
}
