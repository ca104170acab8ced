/// Narrow no-break space, the French thousands separator.
const THOUSANDS_SEP: char = '\u{202f}';

/// Market cap in millions of euros, French style: `1 234,5 M€`, at most one decimal.
pub fn format_mcap_millions(market_cap: f64) -> String {
    if !market_cap.is_finite() {
        return "n/a M€".to_string();
    }
    let millions = market_cap / 1_000_000.0;
    let tenths = (millions.abs() * 10.0).round() as u64;
    let (whole, frac) = (tenths / 10, tenths % 10);
    let sign = if millions < 0.0 && tenths > 0 { "-" } else { "" };

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEP);
        }
        grouped.push(c);
    }

    if frac == 0 {
        format!("{}{} M€", sign, grouped)
    } else {
        format!("{}{},{} M€", sign, grouped, frac)
    }
}

/// Percent change with two decimals; unknown change prints as `n/a`.
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(c) if c.is_finite() => format!("{:.2}%", c),
        _ => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mcap_uses_french_grouping_and_one_decimal() {
        assert_eq!(format_mcap_millions(1_234_567_890.0), "1\u{202f}234,6 M€");
        assert_eq!(format_mcap_millions(12_000_000.0), "12 M€");
        assert_eq!(format_mcap_millions(450_000.0), "0,5 M€");
        assert_eq!(format_mcap_millions(999_999_999_999.0), "1\u{202f}000\u{202f}000 M€");
        assert_eq!(format_mcap_millions(f64::NAN), "n/a M€");
    }

    #[test]
    fn change_has_two_decimals() {
        assert_eq!(format_change(Some(20.0)), "20.00%");
        assert_eq!(format_change(Some(-3.14159)), "-3.14%");
        assert_eq!(format_change(None), "n/a");
    }
}
