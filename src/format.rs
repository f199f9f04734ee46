use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Format a decimal amount as a currency string with thousand separators
/// and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Format a timestamp as a display date.
/// e.g. 2023-05-01 → `"May 1, 2023"`
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
