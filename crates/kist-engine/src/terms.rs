//! Loan terms: the engine's immutable input.

use kist_core::types::{AnnualRate, Date, Tenure};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The full set of inputs for one schedule computation.
///
/// Terms are immutable once built; the engine recomputes the whole schedule
/// from scratch on every call, so there is no state to keep in sync.
///
/// # Example
///
/// ```rust
/// use kist_core::types::Date;
/// use kist_engine::terms::LoanTerms;
///
/// let terms = LoanTerms::builder()
///     .principal(800_000.0)
///     .annual_rate(9.0)
///     .tenure_months(60)
///     .disbursal_date(Date::from_ymd(2025, 3, 15).unwrap())
///     .emi_start_date(Date::from_ymd(2025, 4, 5).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(terms.tenure().months(), 60);
/// assert!(!terms.pre_emi());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Loan amount disbursed.
    principal: f64,
    /// Nominal rate in percent per annum.
    annual_rate: AnnualRate,
    /// Number of monthly installments.
    tenure: Tenure,
    /// Date the loan is disbursed.
    disbursal_date: Date,
    /// Date the first EMI falls due (or the pre-EMI accrual ends).
    emi_start_date: Date,
    /// Whether to charge broken-period interest before regular EMIs.
    pre_emi: bool,
}

impl LoanTerms {
    /// Returns a builder for loan terms.
    #[must_use]
    pub fn builder() -> LoanTermsBuilder {
        LoanTermsBuilder::default()
    }

    /// Returns the principal.
    #[must_use]
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Returns the annual rate.
    #[must_use]
    pub fn annual_rate(&self) -> AnnualRate {
        self.annual_rate
    }

    /// Returns the tenure.
    #[must_use]
    pub fn tenure(&self) -> Tenure {
        self.tenure
    }

    /// Returns the disbursal date.
    #[must_use]
    pub fn disbursal_date(&self) -> Date {
        self.disbursal_date
    }

    /// Returns the EMI start date.
    #[must_use]
    pub fn emi_start_date(&self) -> Date {
        self.emi_start_date
    }

    /// Returns whether a pre-EMI broken-period row is requested.
    #[must_use]
    pub fn pre_emi(&self) -> bool {
        self.pre_emi
    }

    /// Validates the terms.
    ///
    /// Principal, rate, and tenure must all be strictly positive (and
    /// finite). A disbursal date after the EMI start date is not an error;
    /// the broken-period gap clamps to zero days.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidTerms` naming the offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(EngineError::invalid_terms(
                "principal",
                "loan amount must be positive",
            ));
        }
        self.annual_rate
            .validate()
            .map_err(|e| EngineError::invalid_terms("annual_rate", e.to_string()))?;
        self.tenure
            .validate()
            .map_err(|e| EngineError::invalid_terms("tenure", e.to_string()))?;
        Ok(())
    }
}

/// Builder for [`LoanTerms`].
///
/// `principal`, `annual_rate`, `tenure`, `disbursal_date`, and
/// `emi_start_date` are required; `pre_emi` defaults to `false`.
#[derive(Debug, Clone, Default)]
pub struct LoanTermsBuilder {
    principal: Option<f64>,
    annual_rate: Option<AnnualRate>,
    tenure: Option<Tenure>,
    disbursal_date: Option<Date>,
    emi_start_date: Option<Date>,
    pre_emi: bool,
}

impl LoanTermsBuilder {
    /// Sets the principal.
    #[must_use]
    pub fn principal(mut self, principal: f64) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Sets the annual rate from a percent-per-annum value.
    #[must_use]
    pub fn annual_rate(mut self, percent: impl Into<AnnualRate>) -> Self {
        self.annual_rate = Some(percent.into());
        self
    }

    /// Sets the tenure in months.
    #[must_use]
    pub fn tenure_months(mut self, months: u32) -> Self {
        self.tenure = Some(Tenure::from_months(months));
        self
    }

    /// Sets the tenure directly.
    #[must_use]
    pub fn tenure(mut self, tenure: Tenure) -> Self {
        self.tenure = Some(tenure);
        self
    }

    /// Sets the disbursal date.
    #[must_use]
    pub fn disbursal_date(mut self, date: Date) -> Self {
        self.disbursal_date = Some(date);
        self
    }

    /// Sets the EMI start date.
    #[must_use]
    pub fn emi_start_date(mut self, date: Date) -> Self {
        self.emi_start_date = Some(date);
        self
    }

    /// Requests a pre-EMI broken-period interest row.
    #[must_use]
    pub fn pre_emi(mut self, pre_emi: bool) -> Self {
        self.pre_emi = pre_emi;
        self
    }

    /// Builds and validates the terms.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::MissingField` for unset required fields and
    /// `EngineError::InvalidTerms` for non-positive inputs.
    pub fn build(self) -> EngineResult<LoanTerms> {
        let terms = LoanTerms {
            principal: self
                .principal
                .ok_or_else(|| EngineError::missing_field("principal"))?,
            annual_rate: self
                .annual_rate
                .ok_or_else(|| EngineError::missing_field("annual_rate"))?,
            tenure: self
                .tenure
                .ok_or_else(|| EngineError::missing_field("tenure"))?,
            disbursal_date: self
                .disbursal_date
                .ok_or_else(|| EngineError::missing_field("disbursal_date"))?,
            emi_start_date: self
                .emi_start_date
                .ok_or_else(|| EngineError::missing_field("emi_start_date"))?,
            pre_emi: self.pre_emi,
        };
        terms.validate()?;
        Ok(terms)
    }
}
