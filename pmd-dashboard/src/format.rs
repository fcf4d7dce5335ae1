//! Display strings for chart footers, tooltips and bar labels.

use pmd_stats::{TrendDirection, TrendReading};

/// Polish group separator (non-breaking space).
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Group thousands the Polish way: four-digit amounts stay ungrouped.
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() < 5 {
        return digits;
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// "12 400 zł"
pub fn format_pln(amount: u64) -> String {
    format!("{} zł", group_thousands(amount))
}

/// Compact bar label, e.g. "9.5k zł".
pub fn format_kilo_pln(amount: u64) -> String {
    format!("{:.1}k zł", amount as f64 / 1000.0)
}

pub fn format_percent(value: u8) -> String {
    format!("{value}%")
}

/// Footer headline for a trend, e.g. "Trending up by 4.2% this quarter".
pub fn trend_sentence(reading: &TrendReading, scope: &str) -> String {
    match reading {
        TrendReading::Measured(trend) => match trend.direction {
            TrendDirection::Up => format!("Trending up by {:.1}% {scope}", trend.magnitude()),
            TrendDirection::Down => format!("Trending down by {:.1}% {scope}", trend.magnitude()),
            TrendDirection::Flat => format!("Holding steady {scope}"),
        },
        TrendReading::NoTrend(_) => "No trend available".to_string(),
    }
}
