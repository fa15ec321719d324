//! # Kist Core
//!
//! Core types and conventions for the Kist loan EMI analytics library.
//!
//! This crate provides the foundational building blocks used throughout Kist:
//!
//! - **Types**: Domain-specific types like [`Date`], [`AnnualRate`], [`Tenure`]
//! - **Day Count**: The ACT/365F convention used for broken-period interest
//! - **Errors**: Structured error handling shared by the higher crates
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values (a rate is
//!   never a bare number of months)
//! - **Pure Values**: Everything here is `Copy`-cheap plain data with no
//!   hidden state
//!
//! ## Example
//!
//! ```rust
//! use kist_core::prelude::*;
//!
//! let rate = AnnualRate::new(9.0);
//! let start = Date::from_ymd(2025, 4, 1).unwrap();
//! let next = start.add_months(1).unwrap();
//! assert_eq!(next.month(), 5);
//! assert!((rate.monthly_rate() - 0.0075).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod daycount;
pub mod error;
pub mod types;

pub use error::{KistError, KistResult};
pub use types::{AnnualRate, Date, Tenure};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycount::{Act365Fixed, DayCount};
    pub use crate::error::{KistError, KistResult};
    pub use crate::types::{AnnualRate, Date, Tenure};
}
