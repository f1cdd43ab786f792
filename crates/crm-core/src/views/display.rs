//! Number formatting for metric cards and record tables.

use crate::model::Metric;

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Thousands-separated number with at most three decimals: `1,234.5`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let text = rounded.abs().to_string();
    match text.split_once('.') {
        Some((whole, frac)) => format!("{}{}.{}", sign, group_thousands(whole), frac),
        None => format!("{}{}", sign, group_thousands(&text)),
    }
}

/// Whole-dollar amount: `$12,500`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&rounded.abs().to_string()))
}

/// Percentage change with an explicit `+` when positive: `+12.5%`.
pub fn format_change(change: f64) -> String {
    if change > 0.0 {
        format!("+{}%", change)
    } else {
        format!("{}%", change)
    }
}

/// Metric value as shown on its card.
pub fn format_metric_value(metric: &Metric) -> String {
    if metric.is_currency() {
        format_currency(metric.value)
    } else {
        format_number(metric.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Trend;

    #[test]
    fn test_number_grouping() {
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(2.1), "2.1");
        assert_eq!(format_number(-9876.0), "-9,876");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_currency_rounds_to_whole_dollars() {
        assert_eq!(format_currency(30900.0), "$30,900");
        assert_eq!(format_currency(999.5), "$1,000");
        assert_eq!(format_currency(-42.0), "-$42");
    }

    #[test]
    fn test_change_sign() {
        assert_eq!(format_change(12.5), "+12.5%");
        assert_eq!(format_change(-0.8), "-0.8%");
        assert_eq!(format_change(0.0), "0%");
    }

    #[test]
    fn test_metric_value_by_label() {
        let metric = Metric {
            id: None,
            label: "Pipeline Value".into(),
            value: 84000.0,
            change: 0.0,
            trend: Trend::Flat,
        };
        assert_eq!(format_metric_value(&metric), "$84,000");
        let metric = Metric {
            label: "Active Customers".into(),
            value: 1200.0,
            ..metric
        };
        assert_eq!(format_metric_value(&metric), "1,200");
    }
}
