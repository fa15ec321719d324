//! WebAssembly bindings for the Kist loan EMI calculator widget.
//!
//! This crate is the boundary between the pure engine and the embedding
//! page: it accepts the widget's raw control values as JSON, runs the
//! amortization engine, and returns everything the page renders — summary
//! cards, per-year schedule tables, and chart datasets — with both raw
//! numbers and display-formatted strings.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use kist_core::types::Date;
use kist_engine::prelude::*;
use kist_engine::projections::{group_by_year, ChartSeries, RepaymentBreakdown};
use kist_format::{
    amount_in_words, format_dmy, format_dmy_range, format_grouped, format_rupees,
    format_rupees_exact,
};

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the WASM module (sets up panic hook for better error messages).
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// ============================================================================
// Input/Output Types
// ============================================================================

/// Calculator inputs, as read from the widget's controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanParams {
    /// Loan amount.
    pub principal: f64,
    /// Annual rate as a percentage (e.g., 7.1 for 7.1%).
    pub annual_rate_percent: f64,
    /// Tenure in months.
    pub tenure_months: u32,
    /// Disbursal date as "YYYY-MM-DD".
    pub disbursal_date: String,
    /// First EMI date as "YYYY-MM-DD".
    pub emi_start_date: String,
    /// Charge broken-period interest before regular EMIs.
    #[serde(default)]
    pub pre_emi_only: bool,
}

/// Summary card values: raw figures plus display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryView {
    /// Level monthly installment.
    pub monthly_emi: f64,
    /// Monthly installment, formatted ("₹8,884.88").
    pub monthly_emi_display: String,
    /// Broken-period interest, when pre-EMI was requested.
    pub pre_emi_interest: Option<f64>,
    /// Broken-period interest, formatted.
    pub pre_emi_interest_display: Option<String>,
    /// Principal.
    pub loan_amount: f64,
    /// Principal, formatted to whole rupees.
    pub loan_amount_display: String,
    /// Principal in words ("94 Lakh").
    pub loan_amount_words: String,
    /// Total interest over the loan.
    pub total_interest: f64,
    /// Total interest, formatted.
    pub total_interest_display: String,
    /// Principal plus total interest.
    pub total_repayment: f64,
    /// Total repayment, formatted.
    pub total_repayment_display: String,
    /// Tenure in months.
    pub tenure_months: u32,
    /// Tenure in years to two decimals ("20.00").
    pub tenure_years_display: String,
}

/// One rendered schedule table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowView {
    /// "Pre-EMI" or the 1-based installment number.
    pub month: String,
    /// Due date ("05-04-2025") or accrual range for the pre-EMI row.
    pub due_date: String,
    /// Amount payable.
    pub emi: f64,
    /// Amount payable, formatted.
    pub emi_display: String,
    /// Principal component.
    pub principal_paid: f64,
    /// Principal component, formatted.
    pub principal_display: String,
    /// Interest component.
    pub interest_paid: f64,
    /// Interest component, formatted.
    pub interest_display: String,
    /// Balance after the payment.
    pub balance: f64,
    /// Balance, formatted.
    pub balance_display: String,
}

/// Rows of one calendar year, for the collapsible year blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearView {
    /// Calendar year.
    pub year: i32,
    /// Rows due in the year.
    pub rows: Vec<RowView>,
}

/// Chart.js-ready datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartView {
    /// Due-date labels ("05-04-2025"), one per row.
    pub labels: Vec<String>,
    /// Interest component per row.
    pub interest: Vec<f64>,
    /// Principal component per row.
    pub principal: Vec<f64>,
    /// Closing balance per row.
    pub balance: Vec<f64>,
    /// Principal for the proportion chart.
    pub breakdown_principal: f64,
    /// Total interest for the proportion chart.
    pub breakdown_interest: f64,
}

/// The complete widget payload for one calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationView {
    /// Summary card values.
    pub summary: SummaryView,
    /// Year-grouped schedule table.
    pub years: Vec<YearView>,
    /// Chart datasets.
    pub chart: ChartView,
}

/// A loan product preset for seeding the controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductView {
    /// URL slug ("home-loan").
    pub slug: String,
    /// Calculator title.
    pub title: String,
    /// Default principal.
    pub principal: f64,
    /// Default annual rate percent.
    pub annual_rate_percent: f64,
    /// Default tenure in months.
    pub tenure_months: u32,
}

/// Supported control ranges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LimitsView {
    /// Minimum principal.
    pub min_principal: f64,
    /// Maximum principal.
    pub max_principal: f64,
    /// Minimum annual rate percent.
    pub min_rate: f64,
    /// Maximum annual rate percent.
    pub max_rate: f64,
    /// Minimum tenure in months.
    pub min_tenure_months: u32,
    /// Maximum tenure in months.
    pub max_tenure_months: u32,
}

// ============================================================================
// Exported Functions
// ============================================================================

/// Runs the engine for the given params.
///
/// Takes a `LoanParams` object and returns a `CalculationView`; invalid
/// input (non-positive principal, rate, or tenure, or a malformed date)
/// comes back as a rejected `JsValue` with a message the page can show.
#[wasm_bindgen]
pub fn calculate(params: JsValue) -> Result<JsValue, JsValue> {
    let params: LoanParams =
        serde_wasm_bindgen::from_value(params).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let view = calculation_view(&params).map_err(|e| JsValue::from_str(&e))?;
    serde_wasm_bindgen::to_value(&view).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Returns every loan product preset.
#[wasm_bindgen]
pub fn products() -> Result<JsValue, JsValue> {
    let views: Vec<ProductView> = LoanProduct::all()
        .into_iter()
        .map(|p| ProductView {
            slug: p.slug().to_string(),
            title: p.display_name().to_string(),
            principal: p.default_principal(),
            annual_rate_percent: p.default_rate().as_percent(),
            tenure_months: p.default_tenure().months(),
        })
        .collect();
    serde_wasm_bindgen::to_value(&views).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Returns the supported control ranges.
#[wasm_bindgen]
pub fn limits() -> Result<JsValue, JsValue> {
    let view = LimitsView {
        min_principal: InputLimits::MIN_PRINCIPAL,
        max_principal: InputLimits::MAX_PRINCIPAL,
        min_rate: InputLimits::MIN_RATE,
        max_rate: InputLimits::MAX_RATE,
        min_tenure_months: InputLimits::MIN_TENURE_MONTHS,
        max_tenure_months: InputLimits::MAX_TENURE_MONTHS,
    };
    serde_wasm_bindgen::to_value(&view).map_err(|e| JsValue::from_str(&e.to_string()))
}

// ============================================================================
// View Construction
// ============================================================================

fn calculation_view(params: &LoanParams) -> Result<CalculationView, String> {
    let disbursal = Date::parse(&params.disbursal_date).map_err(|e| e.to_string())?;
    let emi_start = Date::parse(&params.emi_start_date).map_err(|e| e.to_string())?;

    let terms = LoanTerms::builder()
        .principal(params.principal)
        .annual_rate(params.annual_rate_percent)
        .tenure_months(params.tenure_months)
        .disbursal_date(disbursal)
        .emi_start_date(emi_start)
        .pre_emi(params.pre_emi_only)
        .build()
        .map_err(|e| e.to_string())?;

    let schedule = ScheduleGenerator::generate(&terms).map_err(|e| e.to_string())?;

    Ok(CalculationView {
        summary: summary_view(&schedule),
        years: year_views(&schedule),
        chart: chart_view(&schedule),
    })
}

fn summary_view(schedule: &Schedule) -> SummaryView {
    let summary = schedule.summary();
    SummaryView {
        monthly_emi: summary.monthly_installment(),
        monthly_emi_display: format_rupees_exact(summary.monthly_installment()),
        pre_emi_interest: summary.pre_emi_interest(),
        pre_emi_interest_display: summary.pre_emi_interest().map(format_rupees_exact),
        loan_amount: summary.total_principal(),
        loan_amount_display: format_rupees(summary.total_principal()),
        loan_amount_words: amount_in_words(summary.total_principal()),
        total_interest: summary.total_interest(),
        total_interest_display: format_rupees_exact(summary.total_interest()),
        total_repayment: summary.total_repayment(),
        total_repayment_display: format_rupees_exact(summary.total_repayment()),
        tenure_months: summary.tenure_months(),
        tenure_years_display: format_grouped(summary.tenure_years(), 2),
    }
}

fn row_view(row: &ScheduleRow) -> RowView {
    let due_date = match row.accrual() {
        Some((from, to)) => format_dmy_range(from, to),
        None => format_dmy(row.due_date()),
    };
    RowView {
        month: row.period().to_string(),
        due_date,
        emi: row.installment_amount(),
        emi_display: format_rupees_exact(row.installment_amount()),
        principal_paid: row.principal_component(),
        principal_display: format_rupees_exact(row.principal_component()),
        interest_paid: row.interest_component(),
        interest_display: format_rupees_exact(row.interest_component()),
        balance: row.closing_balance(),
        balance_display: format_rupees_exact(row.closing_balance()),
    }
}

fn year_views(schedule: &Schedule) -> Vec<YearView> {
    group_by_year(schedule)
        .into_iter()
        .map(|group| YearView {
            year: group.year,
            rows: group.rows.iter().map(row_view).collect(),
        })
        .collect()
}

fn chart_view(schedule: &Schedule) -> ChartView {
    let series = ChartSeries::from_schedule(schedule);
    let breakdown = RepaymentBreakdown::from_schedule(schedule);
    ChartView {
        labels: series.labels.into_iter().map(format_dmy).collect(),
        interest: series.interest,
        principal: series.principal,
        balance: series.balance,
        breakdown_principal: breakdown.principal,
        breakdown_interest: breakdown.total_interest,
    }
}
