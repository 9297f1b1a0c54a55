//! US-locale display formatting for currency and counts.

/// Formats whole US dollars with thousands separators.
///
/// Rounds half away from zero. Negative zero renders as `$0`; non-finite
/// amounts render as `N/A`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "N/A".to_string();
    }
    let rounded = amount.round();
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Formats a number with thousands separators and at most three decimals,
/// dropping trailing zeros.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }

    let scaled = (value.abs() * 1000.0).round();
    let mut whole = (scaled / 1000.0).trunc();
    let mut millis = (scaled - whole * 1000.0).round();
    if millis >= 1000.0 {
        whole += 1.0;
        millis = 0.0;
    }

    let mut out = String::new();
    if value < 0.0 && scaled > 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(&format!("{:.0}", whole)));

    if millis > 0.0 {
        let fraction = format!("{:03}", millis as u32);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

/// Whole hours, e.g. `1,234 hrs`.
pub fn format_hours(hours: f64) -> String {
    format!("{} hrs", format_number(hours))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(999.0), "$999");
    }

    #[test]
    fn currency_negative_amounts() {
        assert_eq!(format_currency(-5000.0), "-$5,000");
    }

    #[test]
    fn currency_zero() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-0.0), "$0");
        assert_eq!(format_currency(-0.4), "$0");
    }

    #[test]
    fn currency_rounds_to_whole_dollars() {
        assert_eq!(format_currency(1234.56), "$1,235");
        assert_eq!(format_currency(0.5), "$1");
    }

    #[test]
    fn currency_non_finite() {
        assert_eq!(format_currency(f64::INFINITY), "N/A");
        assert_eq!(format_currency(f64::NAN), "N/A");
    }

    #[test]
    fn number_groups_thousands() {
        assert_eq!(format_number(1_234_567.0), "1,234,567");
        assert_eq!(format_number(700.0), "700");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn number_keeps_up_to_three_decimals() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(3.14159), "3.142");
        assert_eq!(format_number(-42.25), "-42.25");
    }

    #[test]
    fn hours_suffix() {
        assert_eq!(format_hours(1750.0), "1,750 hrs");
    }
}
