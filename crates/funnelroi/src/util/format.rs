//! Display formatting helpers for the result tables and input panels.

use funnelroi_core::ValueKind;

fn thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();
    if value < 0 { format!("-{}", grouped) } else { grouped }
}

/// Format a currency value without cents, with thousands separators.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded < 0 {
        format!("-${}", thousands(-rounded))
    } else {
        format!("${}", thousands(rounded))
    }
}

/// Format a count rounded to the nearest unit, with thousands separators.
pub fn format_number(value: f64) -> String {
    thousands(value.round() as i64)
}

/// Format a currency value in compact form (e.g., $2.1M, $450K, $50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs_value)
    }
}

/// Format a signed currency delta in compact form.
pub fn format_delta(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let formatted = format_compact_currency(value.abs());
    format!("{}{}", if value >= 0.0 { "+" } else { "-" }, formatted)
}

/// Format an ROI sentinel value.
pub fn format_roi(value: Option<f64>) -> String {
    match value {
        Some(v) if v == f64::INFINITY => "inf".to_string(),
        Some(v) if v.is_finite() => format!("{:.1}%", v * 100.0),
        _ => "N/A".to_string(),
    }
}

/// Format a payback month sentinel value.
pub fn format_payback(value: Option<u32>) -> String {
    match value {
        Some(month) => format!("{} mo", month),
        None => "No payback".to_string(),
    }
}

fn trim_trailing_zeros(text: String) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Display text for an input value (percent kinds shown as 0-100 values).
pub fn format_input(kind: ValueKind, value: f64) -> String {
    match kind {
        ValueKind::Percent => format!("{}%", trim_trailing_zeros(format!("{:.2}", value * 100.0))),
        ValueKind::Currency => format_currency(value),
        ValueKind::Number => format_number(value),
    }
}

/// Display text for a lever delta (percent deltas shown signed).
pub fn format_lever(kind: ValueKind, value: f64) -> String {
    match kind {
        ValueKind::Percent => {
            let display = trim_trailing_zeros(format!("{:.2}", value.abs() * 100.0));
            format!("{}{}%", if value < 0.0 { "-" } else { "+" }, display)
        }
        _ => format_currency(value),
    }
}

/// Editable text for an input value: bare number, percents in 0-100 space.
pub fn edit_text(kind: ValueKind, value: f64) -> String {
    match kind {
        ValueKind::Percent => trim_trailing_zeros(format!("{:.2}", value * 100.0)),
        _ => trim_trailing_zeros(format!("{:.2}", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(48_009_024.4), "$48,009,024");
        assert_eq!(format_currency(-1_500.0), "-$1,500");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(2_100_000.0), "$2.1M");
        assert_eq!(format_compact_currency(450_000.0), "$450K");
        assert_eq!(format_compact_currency(50.0), "$50");
        assert_eq!(format_compact_currency(-30_000.0), "-$30K");
    }

    #[test]
    fn test_format_roi_sentinels() {
        assert_eq!(format_roi(Some(f64::INFINITY)), "inf");
        assert_eq!(format_roi(None), "N/A");
        assert_eq!(format_roi(Some(0.5)), "50.0%");
    }

    #[test]
    fn test_format_payback() {
        assert_eq!(format_payback(Some(3)), "3 mo");
        assert_eq!(format_payback(None), "No payback");
    }

    #[test]
    fn test_percent_display_round_trip() {
        assert_eq!(format_input(ValueKind::Percent, 0.016), "1.6%");
        assert_eq!(edit_text(ValueKind::Percent, 0.016), "1.6");
        assert_eq!(format_lever(ValueKind::Percent, -0.10), "-10%");
        assert_eq!(format_lever(ValueKind::Percent, 0.075), "+7.5%");
    }
}
