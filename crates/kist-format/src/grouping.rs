//! Indian digit grouping and rupee rendering.
//!
//! The Indian numbering convention groups the last three digits, then
//! every two: 1234567 reads "12,34,567". Non-finite inputs render as zero,
//! matching what the widget showed for unparseable fields.

/// Formats a value with Indian digit grouping and a fixed number of
/// fraction digits.
///
/// # Example
///
/// ```rust
/// use kist_format::format_grouped;
///
/// assert_eq!(format_grouped(1234567.891, 2), "12,34,567.89");
/// assert_eq!(format_grouped(-54321.0, 0), "-54,321");
/// ```
#[must_use]
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut out = String::new();
    // No sign when the rounded magnitude is all zeros (-0.004 at 2
    // decimals reads "0.00").
    if value < 0.0 && rendered.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a whole-rupee amount: rounded, grouped, `₹`-prefixed.
///
/// # Example
///
/// ```rust
/// use kist_format::format_rupees;
///
/// assert_eq!(format_rupees(9400000.0), "₹94,00,000");
/// assert_eq!(format_rupees(f64::NAN), "₹0");
/// ```
#[must_use]
pub fn format_rupees(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("₹{}", format_grouped(value.round(), 0))
}

/// Formats a rupee amount with paise (two fraction digits).
#[must_use]
pub fn format_rupees_exact(value: f64) -> String {
    format!("₹{}", format_grouped(value, 2))
}

/// Formats a large amount compactly with Indian unit suffixes.
///
/// Crores, lakhs, and thousands shorten to `Cr`, `L`, and `K`; smaller
/// amounts fall back to whole-rupee grouping.
///
/// # Example
///
/// ```rust
/// use kist_format::format_compact;
///
/// assert_eq!(format_compact(50_000_000.0), "₹5.0Cr");
/// assert_eq!(format_compact(9_400_000.0), "₹94.0L");
/// assert_eq!(format_compact(250_000.0), "₹2.5L");
/// assert_eq!(format_compact(70_000.0), "₹70.0K");
/// assert_eq!(format_compact(950.0), "₹950");
/// ```
#[must_use]
pub fn format_compact(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let magnitude = value.abs();
    if magnitude >= 10_000_000.0 {
        format!("₹{:.1}Cr", value / 10_000_000.0)
    } else if magnitude >= 100_000.0 {
        format!("₹{:.1}L", value / 100_000.0)
    } else if magnitude >= 1_000.0 {
        format!("₹{:.1}K", value / 1_000.0)
    } else {
        format_rupees(value)
    }
}

/// Formats a percentage with a fixed number of fraction digits.
///
/// # Example
///
/// ```rust
/// use kist_format::format_percent;
///
/// assert_eq!(format_percent(7.1, 2), "7.10%");
/// ```
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{:.*}%", decimals, value)
}

/// Groups a bare digit string in the Indian style: last three digits,
/// then every two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}
