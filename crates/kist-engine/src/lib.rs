//! # Kist Engine
//!
//! Amortization engine for monthly reducing-balance loans.
//!
//! Given a principal, an annual interest rate, and a tenure, the engine
//! computes the level monthly installment (EMI), generates the full payment
//! schedule — including an optional leading "pre-EMI" broken-period interest
//! row — and aggregates totals. Everything is a pure function of
//! [`LoanTerms`]: no I/O, no shared state, identical inputs produce
//! identical output.
//!
//! ## Example
//!
//! ```rust
//! use kist_core::types::Date;
//! use kist_engine::prelude::*;
//!
//! let terms = LoanTerms::builder()
//!     .principal(100_000.0)
//!     .annual_rate(12.0)
//!     .tenure_months(12)
//!     .disbursal_date(Date::from_ymd(2025, 1, 1).unwrap())
//!     .emi_start_date(Date::from_ymd(2025, 2, 1).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let schedule = ScheduleGenerator::generate(&terms).unwrap();
//! assert_eq!(schedule.rows().len(), 12);
//! assert!((schedule.summary().monthly_installment() - 8884.88).abs() < 0.01);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod generator;
pub mod products;
pub mod projections;
pub mod schedule;
pub mod terms;

pub use error::{EngineError, EngineResult};
pub use generator::ScheduleGenerator;
pub use schedule::{Period, Schedule, ScheduleRow, ScheduleSummary};
pub use terms::{LoanTerms, LoanTermsBuilder};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::generator::ScheduleGenerator;
    pub use crate::products::{InputLimits, LoanProduct};
    pub use crate::projections::{ChartSeries, RepaymentBreakdown, YearGroup};
    pub use crate::schedule::{Period, Schedule, ScheduleRow, ScheduleSummary};
    pub use crate::terms::{LoanTerms, LoanTermsBuilder};
}
