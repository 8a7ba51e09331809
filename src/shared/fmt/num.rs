//! Number formatting utilities for human-readable display.
//!
//! Rates are shown with a fixed number of fractional digits and comma
//! separators in the integer part, e.g. `1,234.5000`.

/// Unit suffix for displayed exchange rates.
pub const RATE_UNIT: &str = "CAD";

/// Fractional digits shown for exchange rates.
pub const RATE_DECIMALS: usize = 4;

/// Adds thousands separators to the integer part of an already-formatted number.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    if !integer.bytes().all(|b| b.is_ascii_digit()) {
        return formatted.to_string();
    }

    let grouped = integer
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format an f64 with exactly `decimals` fractional digits and separators.
pub fn display_fixed(amount: &f64, decimals: usize) -> String {
    group_thousands(&format!("{:.1$}", amount, decimals))
}

/// Format an exchange rate for display: `1.3500 CAD`.
pub fn display_rate(rate: f64) -> String {
    format!("{} {}", display_fixed(&rate, RATE_DECIMALS), RATE_UNIT)
}
