//! Currency and percentage formatting for table cells and headers.

use super::num::fixed;
use crate::shared::{Currency, Trend};

const DEFAULT_DIGITS: usize = 2;

/// Format a price or market cap.
///
/// `None` or NaN renders as `$0.00` (or `0.00` with `show_symbol == Some(false)`),
/// whatever the currency. `digits` defaults to 2, `currency` to USD. Codes
/// outside [`Currency`] are rendered as an uppercase prefix, e.g. `CHF 12.00`.
pub fn format_currency(
    value: Option<f64>,
    digits: Option<usize>,
    currency: Option<&str>,
    show_symbol: Option<bool>,
) -> String {
    let show_symbol = show_symbol.unwrap_or(true);
    let value = match value {
        Some(v) if !v.is_nan() => v,
        _ => return if show_symbol { "$0.00" } else { "0.00" }.to_string(),
    };

    let digits = digits.unwrap_or(DEFAULT_DIGITS);
    if !show_symbol {
        return fixed(value, digits);
    }

    let code = currency.unwrap_or("usd");
    let prefix = match code.parse::<Currency>() {
        Ok(c) => c.symbol().to_string(),
        Err(_) => format!("{} ", code.to_uppercase()),
    };
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, prefix, fixed(value.abs(), digits))
}

/// One decimal place plus `%`. `None` or NaN renders as `0.0%`.
pub fn format_percentage(change: Option<f64>) -> String {
    match change {
        Some(c) if !c.is_nan() => format!("{:.1}%", c),
        _ => "0.0%".to_string(),
    }
}

/// Like [`format_percentage`], with a leading `+` on upward changes.
pub fn format_change(change: Option<f64>) -> String {
    let formatted = format_percentage(change);
    match change {
        Some(c) if Trend::from_change(c).is_up() => format!("+{}", formatted),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_invalid_values() {
        assert_eq!(format_currency(None, None, None, None), "$0.00");
        assert_eq!(format_currency(Some(f64::NAN), None, Some("eur"), None), "$0.00");
        assert_eq!(format_currency(None, None, None, Some(false)), "0.00");
    }

    #[test]
    fn test_format_currency_symbols() {
        assert_eq!(format_currency(Some(1234.5), None, None, None), "$1,234.50");
        assert_eq!(format_currency(Some(1234.5), None, Some("EUR"), None), "€1,234.50");
        assert_eq!(format_currency(Some(12.0), None, Some("chf"), None), "CHF 12.00");
        assert_eq!(format_currency(Some(-5.25), None, None, None), "-$5.25");
    }

    #[test]
    fn test_format_currency_digits_and_plain() {
        assert_eq!(format_currency(Some(0.123456), Some(4), None, None), "$0.1235");
        assert_eq!(
            format_currency(Some(1_000_000.0), Some(0), None, Some(false)),
            "1,000,000"
        );
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(Some(2.54)), "2.5%");
        assert_eq!(format_percentage(Some(-1.26)), "-1.3%");
        assert_eq!(format_percentage(None), "0.0%");
        assert_eq!(format_percentage(Some(f64::NAN)), "0.0%");
    }

    #[test]
    fn test_format_change_sign() {
        assert_eq!(format_change(Some(3.0)), "+3.0%");
        assert_eq!(format_change(Some(-3.0)), "-3.0%");
        assert_eq!(format_change(Some(0.0)), "0.0%");
    }
}
