//! Read-only projections over a computed schedule.
//!
//! These reshape schedule rows for display consumers — per-year collapsible
//! tables and chart datasets — without recomputing or mutating anything.

use kist_core::types::Date;
use serde::{Deserialize, Serialize};

use crate::schedule::{Schedule, ScheduleRow};

/// Schedule rows falling in one calendar year of due dates.
///
/// The pre-EMI row is grouped under the EMI start date's year, which is its
/// due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearGroup {
    /// Calendar year of the contained rows' due dates.
    pub year: i32,
    /// Rows due in this year, in chronological order.
    pub rows: Vec<ScheduleRow>,
}

/// Groups schedule rows by the calendar year of their due date.
///
/// Rows are chronological, so the groups come out ordered by year with
/// the original row order preserved inside each group.
#[must_use]
pub fn group_by_year(schedule: &Schedule) -> Vec<YearGroup> {
    let mut groups: Vec<YearGroup> = Vec::new();
    for row in schedule.rows() {
        let year = row.due_date().year();
        match groups.last_mut() {
            Some(group) if group.year == year => group.rows.push(*row),
            _ => groups.push(YearGroup {
                year,
                rows: vec![*row],
            }),
        }
    }
    groups
}

/// Parallel series for the repayment line chart.
///
/// One entry per schedule row: the due date as the x-axis label, and the
/// interest, principal, and closing-balance values as datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Due date per row (x-axis labels).
    pub labels: Vec<Date>,
    /// Interest component per row.
    pub interest: Vec<f64>,
    /// Principal component per row.
    pub principal: Vec<f64>,
    /// Closing balance per row.
    pub balance: Vec<f64>,
}

impl ChartSeries {
    /// Extracts the chart series from a schedule.
    #[must_use]
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let rows = schedule.rows();
        Self {
            labels: rows.iter().map(ScheduleRow::due_date).collect(),
            interest: rows.iter().map(ScheduleRow::interest_component).collect(),
            principal: rows.iter().map(ScheduleRow::principal_component).collect(),
            balance: rows.iter().map(ScheduleRow::closing_balance).collect(),
        }
    }
}

/// Principal versus total interest, for the proportion (doughnut) chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepaymentBreakdown {
    /// Principal disbursed.
    pub principal: f64,
    /// Total interest over the life of the loan.
    pub total_interest: f64,
}

impl RepaymentBreakdown {
    /// Extracts the breakdown from a schedule.
    #[must_use]
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            principal: schedule.summary().total_principal(),
            total_interest: schedule.summary().total_interest(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ScheduleGenerator;
    use crate::terms::LoanTerms;
    use kist_core::types::Date;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn schedule(pre_emi: bool) -> Schedule {
        let terms = LoanTerms::builder()
            .principal(800_000.0)
            .annual_rate(9.0)
            .tenure_months(24)
            .disbursal_date(date(2024, 10, 15))
            .emi_start_date(date(2024, 11, 5))
            .pre_emi(pre_emi)
            .build()
            .unwrap();
        ScheduleGenerator::generate(&terms).unwrap()
    }

    #[test]
    fn test_group_by_year_ordering() {
        let schedule = schedule(false);
        let groups = group_by_year(&schedule);

        // Nov 2024 start over 24 months: 2024 (2 rows), 2025 (12), 2026 (10)
        let years: Vec<i32> = groups.iter().map(|g| g.year).collect();
        assert_eq!(years, vec![2024, 2025, 2026]);
        assert_eq!(groups[0].rows.len(), 2);
        assert_eq!(groups[1].rows.len(), 12);
        assert_eq!(groups[2].rows.len(), 10);

        let total: usize = groups.iter().map(|g| g.rows.len()).sum();
        assert_eq!(total, schedule.rows().len());
    }

    #[test]
    fn test_pre_emi_grouped_by_emi_start_year() {
        let schedule = schedule(true);
        let groups = group_by_year(&schedule);

        // The pre-EMI row lands in 2024 with the EMI start date, even
        // though its accrual began in October.
        assert_eq!(groups[0].year, 2024);
        assert!(groups[0].rows[0].period().is_pre_emi());
        // Regular rows start one month late, so 2024 holds pre-EMI + Dec.
        assert_eq!(groups[0].rows.len(), 2);
    }

    #[test]
    fn test_chart_series_parallel_lengths() {
        let schedule = schedule(true);
        let series = ChartSeries::from_schedule(&schedule);
        let n = schedule.rows().len();
        assert_eq!(series.labels.len(), n);
        assert_eq!(series.interest.len(), n);
        assert_eq!(series.principal.len(), n);
        assert_eq!(series.balance.len(), n);
        assert_eq!(series.labels[0], date(2024, 11, 5));
    }

    #[test]
    fn test_breakdown_matches_summary() {
        let schedule = schedule(false);
        let breakdown = RepaymentBreakdown::from_schedule(&schedule);
        assert_eq!(breakdown.principal, 800_000.0);
        assert_eq!(breakdown.total_interest, schedule.summary().total_interest());
    }
}
