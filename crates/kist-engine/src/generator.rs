//! Schedule generation for monthly reducing-balance loans.

use kist_core::daycount::{Act365Fixed, DayCount};
use log::debug;

use crate::error::EngineResult;
use crate::schedule::{Schedule, ScheduleRow, ScheduleSummary};
use crate::terms::LoanTerms;

/// Generates payment schedules from loan terms.
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Computes the level monthly installment for a reducing-balance loan.
    ///
    /// Standard annuity formula:
    /// `E = P * r * (1 + r)^n / ((1 + r)^n - 1)` where `r` is the monthly
    /// rate and `n` the number of installments. Well-defined for every
    /// `r > 0`, `n > 0`.
    #[must_use]
    pub fn installment(principal: f64, monthly_rate: f64, periods: u32) -> f64 {
        let growth = (1.0 + monthly_rate).powi(periods as i32);
        principal * monthly_rate * growth / (growth - 1.0)
    }

    /// Generates the full schedule for the given terms.
    ///
    /// Without pre-EMI the schedule holds one row per installment, due
    /// monthly from the EMI start date. With pre-EMI a leading
    /// broken-period interest row covers disbursal to EMI start, and the
    /// regular installments begin one month after the EMI start date.
    ///
    /// Due dates are derived from the EMI start anchor with
    /// [`Date::add_months`](kist_core::types::Date::add_months), which
    /// clamps to the end of short months.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidTerms` when principal, rate, or tenure
    /// is not strictly positive. No other failure exists for valid terms.
    pub fn generate(terms: &LoanTerms) -> EngineResult<Schedule> {
        terms.validate()?;

        let principal = terms.principal();
        let monthly_rate = terms.annual_rate().monthly_rate();
        let periods = terms.tenure().months();
        let emi = Self::installment(principal, monthly_rate, periods);

        debug!(
            "generating schedule: principal={principal}, rate={}, periods={periods}, pre_emi={}",
            terms.annual_rate(),
            terms.pre_emi()
        );

        let mut rows = Vec::with_capacity(periods as usize + usize::from(terms.pre_emi()));
        let mut total_interest = 0.0;

        let pre_emi_interest = if terms.pre_emi() {
            let charge = Self::broken_period_interest(terms);
            total_interest += charge;
            rows.push(ScheduleRow::pre_emi(
                terms.disbursal_date(),
                terms.emi_start_date(),
                charge,
                principal,
            ));
            Some(charge)
        } else {
            None
        };

        // With a pre-EMI phase the first regular installment falls one
        // month after the EMI start date; otherwise on it.
        let anchor = terms.emi_start_date();
        let offset = i32::from(terms.pre_emi());

        let mut balance = principal;
        for i in 1..=periods {
            let interest = balance * monthly_rate;
            let principal_paid = emi - interest;
            balance = (balance - principal_paid).max(0.0);
            total_interest += interest;

            let due = anchor.add_months(offset + i as i32 - 1)?;
            rows.push(ScheduleRow::installment(
                i,
                due,
                emi,
                principal_paid,
                interest,
                balance,
            ));
        }

        let summary =
            ScheduleSummary::new(emi, pre_emi_interest, principal, total_interest, periods);
        Ok(Schedule::new(summary, rows))
    }

    /// Computes the broken-period (pre-EMI) interest charge.
    ///
    /// Simple interest on the full principal for the actual days between
    /// disbursal and EMI start over a fixed 365-day year, never
    /// compounded. A negative gap clamps to zero days.
    fn broken_period_interest(terms: &LoanTerms) -> f64 {
        let dc = Act365Fixed;
        let fraction = dc
            .year_fraction(terms.disbursal_date(), terms.emi_start_date())
            .max(0.0);
        terms.principal() * terms.annual_rate().as_decimal() * fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kist_core::types::Date;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn terms(principal: f64, rate: f64, months: u32) -> LoanTerms {
        LoanTerms::builder()
            .principal(principal)
            .annual_rate(rate)
            .tenure_months(months)
            .disbursal_date(date(2025, 1, 10))
            .emi_start_date(date(2025, 2, 5))
            .build()
            .unwrap()
    }

    #[test]
    fn test_installment_formula() {
        // 100000 at 12% over 12 months: classic annuity table value.
        let emi = ScheduleGenerator::installment(100_000.0, 0.01, 12);
        assert_relative_eq!(emi, 8884.878867834166, max_relative = 1e-12);
    }

    #[test]
    fn test_row_count_and_order() {
        let schedule = ScheduleGenerator::generate(&terms(100_000.0, 12.0, 12)).unwrap();
        assert_eq!(schedule.rows().len(), 12);
        for (i, row) in schedule.rows().iter().enumerate() {
            assert_eq!(row.period().index(), Some(i as u32 + 1));
        }
    }

    #[test]
    fn test_due_dates_monthly_from_start() {
        let schedule = ScheduleGenerator::generate(&terms(100_000.0, 12.0, 12)).unwrap();
        assert_eq!(schedule.rows()[0].due_date(), date(2025, 2, 5));
        assert_eq!(schedule.rows()[1].due_date(), date(2025, 3, 5));
        assert_eq!(schedule.rows()[11].due_date(), date(2026, 1, 5));
    }

    #[test]
    fn test_due_dates_clamp_at_month_end() {
        let terms = LoanTerms::builder()
            .principal(100_000.0)
            .annual_rate(12.0)
            .tenure_months(4)
            .disbursal_date(date(2025, 1, 1))
            .emi_start_date(date(2025, 1, 31))
            .build()
            .unwrap();
        let schedule = ScheduleGenerator::generate(&terms).unwrap();
        let dues: Vec<Date> = schedule.rows().iter().map(|r| r.due_date()).collect();
        assert_eq!(
            dues,
            vec![
                date(2025, 1, 31),
                date(2025, 2, 28),
                date(2025, 3, 31),
                date(2025, 4, 30),
            ]
        );
    }

    #[test]
    fn test_balance_reaches_zero() {
        let schedule = ScheduleGenerator::generate(&terms(100_000.0, 12.0, 12)).unwrap();
        let last = schedule.rows().last().unwrap();
        assert!(last.closing_balance().abs() < 0.01);
    }

    #[test]
    fn test_components_sum_to_installment() {
        let schedule = ScheduleGenerator::generate(&terms(800_000.0, 9.0, 60)).unwrap();
        for row in schedule.rows() {
            assert_relative_eq!(
                row.principal_component() + row.interest_component(),
                row.installment_amount(),
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_totals_accounting() {
        let schedule = ScheduleGenerator::generate(&terms(800_000.0, 9.0, 60)).unwrap();
        let summary = schedule.summary();
        let interest_sum: f64 = schedule.rows().iter().map(ScheduleRow::interest_component).sum();
        assert_relative_eq!(summary.total_interest(), interest_sum, max_relative = 1e-9);
        assert_eq!(
            summary.total_repayment(),
            summary.total_principal() + summary.total_interest()
        );
    }

    #[test]
    fn test_pre_emi_layout() {
        let terms = LoanTerms::builder()
            .principal(500_000.0)
            .annual_rate(7.1)
            .tenure_months(6)
            .disbursal_date(date(2024, 1, 1))
            .emi_start_date(date(2024, 4, 1))
            .pre_emi(true)
            .build()
            .unwrap();
        let schedule = ScheduleGenerator::generate(&terms).unwrap();

        assert_eq!(schedule.rows().len(), 7);
        let first = &schedule.rows()[0];
        assert!(first.period().is_pre_emi());
        // 91 actual days in the 2024 leap-year quarter
        assert_relative_eq!(
            first.installment_amount(),
            500_000.0 * 0.071 * 91.0 / 365.0,
            max_relative = 1e-12
        );
        assert_eq!(first.closing_balance(), 500_000.0);

        // Regular rows start one month after EMI start.
        assert_eq!(schedule.rows()[1].due_date(), date(2024, 5, 1));
        assert_eq!(schedule.rows()[6].due_date(), date(2024, 10, 1));
    }

    #[test]
    fn test_pre_emi_negative_gap_clamps_to_zero() {
        let terms = LoanTerms::builder()
            .principal(500_000.0)
            .annual_rate(7.1)
            .tenure_months(6)
            .disbursal_date(date(2024, 6, 1))
            .emi_start_date(date(2024, 4, 1))
            .pre_emi(true)
            .build()
            .unwrap();
        let schedule = ScheduleGenerator::generate(&terms).unwrap();
        let first = &schedule.rows()[0];
        assert_eq!(first.installment_amount(), 0.0);
        assert_eq!(schedule.summary().pre_emi_interest(), Some(0.0));
    }

    #[test]
    fn test_pre_emi_total_interest_includes_charge() {
        let with = LoanTerms::builder()
            .principal(500_000.0)
            .annual_rate(7.1)
            .tenure_months(6)
            .disbursal_date(date(2024, 1, 1))
            .emi_start_date(date(2024, 4, 1))
            .pre_emi(true)
            .build()
            .unwrap();
        let without = LoanTerms::builder()
            .principal(500_000.0)
            .annual_rate(7.1)
            .tenure_months(6)
            .disbursal_date(date(2024, 1, 1))
            .emi_start_date(date(2024, 4, 1))
            .build()
            .unwrap();

        let a = ScheduleGenerator::generate(&with).unwrap();
        let b = ScheduleGenerator::generate(&without).unwrap();
        let charge = a.summary().pre_emi_interest().unwrap();
        assert!(charge > 0.0);
        assert_relative_eq!(
            a.summary().total_interest(),
            b.summary().total_interest() + charge,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_invalid_terms_produce_no_schedule() {
        for bad in [
            LoanTerms::builder()
                .principal(0.0)
                .annual_rate(9.0)
                .tenure_months(12),
            LoanTerms::builder()
                .principal(100_000.0)
                .annual_rate(0.0)
                .tenure_months(12),
            LoanTerms::builder()
                .principal(100_000.0)
                .annual_rate(9.0)
                .tenure_months(0),
        ] {
            let result = bad
                .disbursal_date(date(2025, 1, 1))
                .emi_start_date(date(2025, 2, 1))
                .build();
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_idempotence() {
        let t = terms(9_400_000.0, 7.45, 240);
        let a = ScheduleGenerator::generate(&t).unwrap();
        let b = ScheduleGenerator::generate(&t).unwrap();
        assert_eq!(a, b);
    }
}
