//! Formatting helpers shared by the report views

use crate::models::Money;

/// Group an integer with thousands separators
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Currency with cents and thousands separators, e.g. `$1,234.50`
pub fn format_currency(amount: Money, symbol: &str) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = amount.abs();
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(abs.dollars()),
        abs.cents_part()
    )
}

/// Currency rounded to whole units, as on summary cards, e.g. `$1,235`
pub fn format_whole(amount: Money, symbol: &str) -> String {
    let rounded = amount.round_whole();
    let sign = if rounded.is_negative() { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group_thousands(rounded.dollars().abs()))
}

/// Percentage with a fixed number of decimals
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Rate in basis points as a percentage, dropping a zero fraction
pub fn format_bps(bps: u32) -> String {
    if bps % 100 == 0 {
        format!("{}%", bps / 100)
    } else {
        format_percentage(f64::from(bps) / 100.0, 1)
    }
}

/// Agreement rate between signal sources, given as a fraction
///
/// A missing rate shows as `0.0%`.
pub fn format_agreement_rate(rate: Option<f64>) -> String {
    format_percentage(rate.unwrap_or(0.0) * 100.0, 1)
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.len()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
