//! # Kist Format
//!
//! Presentation-boundary formatting for the Kist loan EMI analytics library.
//!
//! The engine works in full-precision floats and ISO dates; everything a
//! person actually reads — rupee amounts with Indian digit grouping
//! ("12,34,567"), compact "₹9.4Cr" figures, amounts in words, and
//! `DD-MM-YYYY` dates — is produced here and only here.
//!
//! ## Example
//!
//! ```rust
//! use kist_format::{format_rupees, format_rupees_exact, amount_in_words};
//!
//! assert_eq!(format_rupees(1_234_567.0), "₹12,34,567");
//! assert_eq!(format_rupees_exact(8884.878), "₹8,884.88");
//! assert_eq!(amount_in_words(9_400_000.0), "94 Lakh");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

mod dates;
mod grouping;
mod words;

pub use dates::{format_dmy, format_dmy_range};
pub use grouping::{
    format_compact, format_grouped, format_percent, format_rupees, format_rupees_exact,
};
pub use words::amount_in_words;
