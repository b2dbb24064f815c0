use crate::stats_analysis::domain::DateRange;
use chrono::NaiveDate;

/// Abbreviates large counts: `1.2K`, `3.4M`, `5.6B`
///
/// Values below one thousand are printed in full.
pub fn format_number(value: u64) -> String {
    match value {
        v if v >= 1_000_000_000 => format!("{:.1}B", v as f64 / 1_000_000_000.0),
        v if v >= 1_000_000 => format!("{:.1}M", v as f64 / 1_000_000.0),
        v if v >= 1_000 => format!("{:.1}K", v as f64 / 1_000.0),
        v => v.to_string(),
    }
}

/// Full count with thousands separators: `1,234,567`
pub fn format_number_full(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Signed percentage with one decimal: `+12.3%`, `-4.0%`
pub fn format_growth_rate(rate: f64) -> String {
    let sign = if rate >= 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, rate)
}

/// Byte size in `B`, `kB` or `MB` (base 1024)
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let value = bytes as f64;

    if value < KIB {
        format!("{} B", bytes)
    } else if value < KIB * KIB {
        format!("{:.1} kB", value / KIB)
    } else {
        format!("{:.1} MB", value / (KIB * KIB))
    }
}

/// `d MMM yyyy`, e.g. `5 Jan 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

pub fn format_date_range(range: &DateRange) -> String {
    format!("{} - {}", format_date(range.start()), format_date(range.end()))
}
