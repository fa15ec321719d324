//! Date rendering for schedule tables.

use kist_core::types::Date;

/// Formats a date as `DD-MM-YYYY`, the schedule table convention.
///
/// # Example
///
/// ```rust
/// use kist_core::types::Date;
/// use kist_format::format_dmy;
///
/// let date = Date::from_ymd(2024, 4, 1).unwrap();
/// assert_eq!(format_dmy(date), "01-04-2024");
/// ```
#[must_use]
pub fn format_dmy(date: Date) -> String {
    format!("{:02}-{:02}-{}", date.day(), date.month(), date.year())
}

/// Formats an accrual range, as shown on the pre-EMI row.
///
/// # Example
///
/// ```rust
/// use kist_core::types::Date;
/// use kist_format::format_dmy_range;
///
/// let from = Date::from_ymd(2024, 1, 1).unwrap();
/// let to = Date::from_ymd(2024, 4, 1).unwrap();
/// assert_eq!(format_dmy_range(from, to), "01-01-2024 to 01-04-2024");
/// ```
#[must_use]
pub fn format_dmy_range(from: Date, to: Date) -> String {
    format!("{} to {}", format_dmy(from), format_dmy(to))
}
