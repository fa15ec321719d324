//! Schedule data model: rows, summary, and the computed schedule.

use kist_core::types::Date;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a row within the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Broken-period interest charged between disbursal and the first EMI.
    PreEmi,
    /// Regular installment, 1-based.
    Installment(u32),
}

impl Period {
    /// Returns true for the pre-EMI marker row.
    #[must_use]
    pub fn is_pre_emi(&self) -> bool {
        matches!(self, Period::PreEmi)
    }

    /// Returns the 1-based installment index, if this is a regular row.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        match self {
            Period::PreEmi => None,
            Period::Installment(i) => Some(*i),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::PreEmi => write!(f, "Pre-EMI"),
            Period::Installment(i) => write!(f, "{i}"),
        }
    }
}

/// One payment in the schedule.
///
/// For regular rows the principal and interest components sum to the
/// installment amount. The pre-EMI row carries the broken-period charge
/// entirely as interest, leaves the balance untouched, and records the
/// accrual range it covers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Row identity: pre-EMI marker or 1-based installment index.
    period: Period,
    /// Payment due date. For the pre-EMI row this is the EMI start date,
    /// which also decides the row's display year.
    due_date: Date,
    /// Accrual period start (pre-EMI row only).
    accrual_start: Option<Date>,
    /// Accrual period end (pre-EMI row only).
    accrual_end: Option<Date>,
    /// Amount payable for the row.
    installment: f64,
    /// Portion of the installment that repays principal.
    principal_component: f64,
    /// Portion of the installment that pays interest.
    interest_component: f64,
    /// Outstanding balance after this payment, floored at zero.
    closing_balance: f64,
}

impl ScheduleRow {
    /// Creates a regular installment row.
    #[must_use]
    pub fn installment(
        index: u32,
        due_date: Date,
        amount: f64,
        principal_component: f64,
        interest_component: f64,
        closing_balance: f64,
    ) -> Self {
        Self {
            period: Period::Installment(index),
            due_date,
            accrual_start: None,
            accrual_end: None,
            installment: amount,
            principal_component,
            interest_component,
            closing_balance,
        }
    }

    /// Creates the leading pre-EMI row.
    ///
    /// The whole charge is interest; the balance stays at the principal.
    #[must_use]
    pub fn pre_emi(accrual_start: Date, accrual_end: Date, charge: f64, principal: f64) -> Self {
        Self {
            period: Period::PreEmi,
            due_date: accrual_end,
            accrual_start: Some(accrual_start),
            accrual_end: Some(accrual_end),
            installment: charge,
            principal_component: 0.0,
            interest_component: charge,
            closing_balance: principal,
        }
    }

    /// Returns the row's period.
    #[must_use]
    pub fn period(&self) -> Period {
        self.period
    }

    /// Returns the due date.
    #[must_use]
    pub fn due_date(&self) -> Date {
        self.due_date
    }

    /// Returns the accrual range covered by a pre-EMI row.
    #[must_use]
    pub fn accrual(&self) -> Option<(Date, Date)> {
        match (self.accrual_start, self.accrual_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Returns the amount payable.
    #[must_use]
    pub fn installment_amount(&self) -> f64 {
        self.installment
    }

    /// Returns the principal component.
    #[must_use]
    pub fn principal_component(&self) -> f64 {
        self.principal_component
    }

    /// Returns the interest component.
    #[must_use]
    pub fn interest_component(&self) -> f64 {
        self.interest_component
    }

    /// Returns the closing balance.
    #[must_use]
    pub fn closing_balance(&self) -> f64 {
        self.closing_balance
    }
}

/// Aggregated figures for a computed schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// The level monthly installment.
    monthly_installment: f64,
    /// Broken-period interest, when a pre-EMI row was generated.
    pre_emi_interest: Option<f64>,
    /// Principal disbursed.
    total_principal: f64,
    /// Sum of every row's interest component (pre-EMI included).
    total_interest: f64,
    /// Principal plus total interest.
    total_repayment: f64,
    /// Number of monthly installments.
    tenure_months: u32,
    /// Tenure in years, exact fraction (months / 12).
    tenure_years: f64,
}

impl ScheduleSummary {
    pub(crate) fn new(
        monthly_installment: f64,
        pre_emi_interest: Option<f64>,
        total_principal: f64,
        total_interest: f64,
        tenure_months: u32,
    ) -> Self {
        Self {
            monthly_installment,
            pre_emi_interest,
            total_principal,
            total_interest,
            total_repayment: total_principal + total_interest,
            tenure_months,
            tenure_years: f64::from(tenure_months) / 12.0,
        }
    }

    /// Returns the level monthly installment.
    #[must_use]
    pub fn monthly_installment(&self) -> f64 {
        self.monthly_installment
    }

    /// Returns the broken-period interest, if a pre-EMI row was generated.
    #[must_use]
    pub fn pre_emi_interest(&self) -> Option<f64> {
        self.pre_emi_interest
    }

    /// Returns the principal.
    #[must_use]
    pub fn total_principal(&self) -> f64 {
        self.total_principal
    }

    /// Returns the total interest over the life of the loan.
    #[must_use]
    pub fn total_interest(&self) -> f64 {
        self.total_interest
    }

    /// Returns principal plus total interest.
    #[must_use]
    pub fn total_repayment(&self) -> f64 {
        self.total_repayment
    }

    /// Returns the tenure in months.
    #[must_use]
    pub fn tenure_months(&self) -> u32 {
        self.tenure_months
    }

    /// Returns the tenure in years as an exact fraction.
    #[must_use]
    pub fn tenure_years(&self) -> f64 {
        self.tenure_years
    }
}

/// A computed payment schedule: summary plus chronologically ordered rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    summary: ScheduleSummary,
    rows: Vec<ScheduleRow>,
}

impl Schedule {
    pub(crate) fn new(summary: ScheduleSummary, rows: Vec<ScheduleRow>) -> Self {
        Self { summary, rows }
    }

    /// Returns the summary.
    #[must_use]
    pub fn summary(&self) -> &ScheduleSummary {
        &self.summary
    }

    /// Returns the rows in chronological order.
    #[must_use]
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Returns the regular installment rows, skipping a pre-EMI marker.
    pub fn installment_rows(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter().filter(|r| !r.period().is_pre_emi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_period_display() {
        assert_eq!(Period::PreEmi.to_string(), "Pre-EMI");
        assert_eq!(Period::Installment(7).to_string(), "7");
        assert_eq!(Period::Installment(7).index(), Some(7));
        assert_eq!(Period::PreEmi.index(), None);
    }

    #[test]
    fn test_pre_emi_row_shape() {
        let row = ScheduleRow::pre_emi(date(2024, 1, 1), date(2024, 4, 1), 8850.68, 500_000.0);
        assert!(row.period().is_pre_emi());
        assert_eq!(row.due_date(), date(2024, 4, 1));
        assert_eq!(row.accrual(), Some((date(2024, 1, 1), date(2024, 4, 1))));
        assert_eq!(row.principal_component(), 0.0);
        assert_eq!(row.interest_component(), row.installment_amount());
        assert_eq!(row.closing_balance(), 500_000.0);
    }

    #[test]
    fn test_installment_row_has_no_accrual() {
        let row = ScheduleRow::installment(1, date(2025, 2, 1), 100.0, 60.0, 40.0, 940.0);
        assert_eq!(row.accrual(), None);
        assert_eq!(row.period().index(), Some(1));
    }

    #[test]
    fn test_summary_repayment_identity() {
        let summary = ScheduleSummary::new(8884.88, None, 100_000.0, 6618.55, 12);
        assert_eq!(
            summary.total_repayment(),
            summary.total_principal() + summary.total_interest()
        );
        assert!((summary.tenure_years() - 1.0).abs() < 1e-12);
    }
}
