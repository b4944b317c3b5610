use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Currency labels
// ---------------------------------------------------------------------------

/// Dollar amount with thousands separators and two decimals: `$1,234.56`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Same as [`format_currency`] for plot coordinates, which egui hands us as
/// `f64`. Non-finite values render as-is.
pub fn format_currency_f64(amount: f64) -> String {
    match Decimal::try_from(amount) {
        Ok(d) => format_currency(d),
        Err(_) => format!("{amount}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(7)), "$7.00");
        assert_eq!(format_currency(dec!(999.9)), "$999.90");
        assert_eq!(format_currency(dec!(1000)), "$1,000.00");
        assert_eq!(format_currency(dec!(1234.567)), "$1,234.57");
        assert_eq!(format_currency(dec!(66000)), "$66,000.00");
        assert_eq!(format_currency(dec!(1234567890.1)), "$1,234,567,890.10");
    }

    #[test]
    fn test_format_negative_currency() {
        assert_eq!(format_currency(dec!(-1500.5)), "-$1,500.50");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn test_format_currency_f64() {
        assert_eq!(format_currency_f64(250000.0), "$250,000.00");
        assert_eq!(format_currency_f64(f64::NAN), "NaN");
    }
}
