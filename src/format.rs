use chrono::NaiveDate;
use rust_decimal::Decimal;

fn format_with_commas(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `-$1,234.50` style, always two decimals.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", amount.abs().round_dp(2));
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}{}{}.{}", sign, symbol, format_with_commas(whole), cents)
}

/// Formats a raw transaction amount for a list row. Text that is not a number
/// is shown as-is.
pub fn format_amount_text(raw: &str, symbol: &str) -> String {
    match raw.trim().parse::<Decimal>() {
        Ok(value) => format_currency(value, symbol),
        Err(_) => format!("{}{}", symbol, raw),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(dec!(1234567.5), "$"), "$1,234,567.50");
        assert_eq!(format_currency(dec!(999), "$"), "$999.00");
        assert_eq!(format_currency(dec!(1000), "€"), "€1,000.00");
    }

    #[test]
    fn negative_and_zero() {
        assert_eq!(format_currency(dec!(-15.5), "$"), "-$15.50");
        assert_eq!(format_currency(Decimal::ZERO, "$"), "$0.00");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_currency(dec!(0.125), "$"), "$0.12");
        assert_eq!(format_currency(dec!(2.999), "$"), "$3.00");
    }

    #[test]
    fn amount_text_falls_back_to_raw() {
        assert_eq!(format_amount_text("12.5", "$"), "$12.50");
        assert_eq!(format_amount_text("n/a", "$"), "$n/a");
    }

    #[test]
    fn dates_are_day_first() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(format_date(date), "09/02/2024");
    }
}
