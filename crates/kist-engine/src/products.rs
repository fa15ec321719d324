//! Loan product presets and input limits.
//!
//! Retail lenders quote different default amounts, rates, and tenures per
//! product; the widget seeds its controls from these and clamps whatever
//! the user types to the supported ranges.

use kist_core::types::{AnnualRate, Tenure};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Retail loan product classification.
///
/// Each product carries the default terms its calculator page starts from.
///
/// # Example
///
/// ```rust
/// use kist_engine::products::LoanProduct;
///
/// let product = LoanProduct::CarLoan;
/// assert_eq!(product.default_principal(), 800_000.0);
/// assert_eq!(product.default_tenure().months(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanProduct {
    /// Home purchase loan.
    HomeLoan,
    /// Unsecured personal loan.
    PersonalLoan,
    /// Car loan.
    CarLoan,
    /// Two wheeler loan.
    TwoWheelerLoan,
    /// Loan against property (LAP).
    PropertyLoan,
    /// Product-agnostic calculator defaults.
    Generic,
}

impl LoanProduct {
    /// Returns every product, generic last.
    #[must_use]
    pub fn all() -> [LoanProduct; 6] {
        [
            LoanProduct::HomeLoan,
            LoanProduct::PersonalLoan,
            LoanProduct::CarLoan,
            LoanProduct::TwoWheelerLoan,
            LoanProduct::PropertyLoan,
            LoanProduct::Generic,
        ]
    }

    /// Returns the product's URL slug.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            LoanProduct::HomeLoan => "home-loan",
            LoanProduct::PersonalLoan => "personal-loan",
            LoanProduct::CarLoan => "car-loan",
            LoanProduct::TwoWheelerLoan => "two-wheeler-loan",
            LoanProduct::PropertyLoan => "lap-loan",
            LoanProduct::Generic => "emi-calculator",
        }
    }

    /// Looks a product up by its URL slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        LoanProduct::all().into_iter().find(|p| p.slug() == slug)
    }

    /// Returns the calculator title for the product.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            LoanProduct::HomeLoan => "Home Loan EMI Calculator",
            LoanProduct::PersonalLoan => "Personal Loan EMI Calculator",
            LoanProduct::CarLoan => "Car Loan EMI Calculator",
            LoanProduct::TwoWheelerLoan => "Two Wheeler Loan EMI Calculator",
            LoanProduct::PropertyLoan => "Loan Against Property (LAP) EMI Calculator",
            LoanProduct::Generic => "EMI Calculator",
        }
    }

    /// Returns the default principal for the product.
    #[must_use]
    pub fn default_principal(&self) -> f64 {
        match self {
            LoanProduct::HomeLoan => 5_000_000.0,
            LoanProduct::PersonalLoan => 200_000.0,
            LoanProduct::CarLoan => 800_000.0,
            LoanProduct::TwoWheelerLoan => 70_000.0,
            LoanProduct::PropertyLoan | LoanProduct::Generic => 9_400_000.0,
        }
    }

    /// Returns the default annual rate for the product.
    #[must_use]
    pub fn default_rate(&self) -> AnnualRate {
        let percent = match self {
            LoanProduct::HomeLoan => 7.10,
            LoanProduct::PersonalLoan => 13.50,
            LoanProduct::CarLoan => 9.00,
            LoanProduct::TwoWheelerLoan => 9.50,
            LoanProduct::PropertyLoan => 8.50,
            LoanProduct::Generic => 7.45,
        };
        AnnualRate::new(percent)
    }

    /// Returns the default tenure for the product.
    #[must_use]
    pub fn default_tenure(&self) -> Tenure {
        let months = match self {
            LoanProduct::HomeLoan | LoanProduct::PropertyLoan | LoanProduct::Generic => 240,
            LoanProduct::PersonalLoan | LoanProduct::CarLoan => 60,
            LoanProduct::TwoWheelerLoan => 36,
        };
        Tenure::from_months(months)
    }
}

impl fmt::Display for LoanProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Supported input ranges for the calculator controls.
///
/// Out-of-range values clamp rather than error; hard validation lives in
/// [`LoanTerms::validate`](crate::terms::LoanTerms::validate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLimits;

impl InputLimits {
    /// Minimum loan amount.
    pub const MIN_PRINCIPAL: f64 = 10_000.0;
    /// Maximum loan amount (5 crore).
    pub const MAX_PRINCIPAL: f64 = 50_000_000.0;
    /// Minimum annual rate, percent.
    pub const MIN_RATE: f64 = 1.0;
    /// Maximum annual rate, percent.
    pub const MAX_RATE: f64 = 20.0;
    /// Minimum tenure in months.
    pub const MIN_TENURE_MONTHS: u32 = 6;
    /// Maximum tenure in months (30 years).
    pub const MAX_TENURE_MONTHS: u32 = 360;

    /// Clamps a loan amount to the supported range.
    #[must_use]
    pub fn clamp_principal(amount: f64) -> f64 {
        amount.clamp(Self::MIN_PRINCIPAL, Self::MAX_PRINCIPAL)
    }

    /// Clamps an annual rate to the supported range.
    #[must_use]
    pub fn clamp_rate(percent: f64) -> AnnualRate {
        AnnualRate::new(percent.clamp(Self::MIN_RATE, Self::MAX_RATE))
    }

    /// Clamps a tenure in months to the supported range.
    #[must_use]
    pub fn clamp_tenure_months(months: u32) -> Tenure {
        Tenure::from_months(months.clamp(Self::MIN_TENURE_MONTHS, Self::MAX_TENURE_MONTHS))
    }

    /// Clamps a tenure given in years, rounding to whole months.
    #[must_use]
    pub fn clamp_tenure_years(years: f64) -> Tenure {
        Self::clamp_tenure_months(Tenure::from_years(years).months())
    }
}
