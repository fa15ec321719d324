//! Amounts in words with Indian units.

/// Renders a positive amount in compact Indian units:
/// "1 Crore 23 Lakh 45 Thousand 678".
///
/// This is the live caption shown under the principal field as the user
/// types. Fractions are dropped; zero, negative, and non-finite amounts
/// render as an empty string so the caption simply disappears.
///
/// # Example
///
/// ```rust
/// use kist_format::amount_in_words;
///
/// assert_eq!(amount_in_words(5_000_000.0), "50 Lakh");
/// assert_eq!(amount_in_words(12_34_567.0), "12 Lakh 34 Thousand 567");
/// assert_eq!(amount_in_words(0.0), "");
/// ```
#[must_use]
pub fn amount_in_words(value: f64) -> String {
    if !value.is_finite() || value < 1.0 {
        return String::new();
    }

    const UNITS: [&str; 4] = ["", "Thousand", "Lakh", "Crore"];

    let mut n = value.floor() as u64;
    let mut parts: Vec<String> = Vec::new();
    let mut i = 0;
    while n > 0 && i < UNITS.len() {
        // The first group holds three digits, every higher one two.
        let modulus = if i == 0 { 1000 } else { 100 };
        let part = n % modulus;
        if part > 0 {
            if UNITS[i].is_empty() {
                parts.push(part.to_string());
            } else {
                parts.push(format!("{part} {}", UNITS[i]));
            }
        }
        n /= modulus;
        i += 1;
    }

    parts.reverse();
    parts.join(" ")
}
