//! BRL currency formatting and parsing.
//!
//! This module implements the fixed Brazilian display convention used by
//! the registry's consumers: `R$` prefix, `.` thousands separator, `,`
//! decimal separator, two fraction digits. All arithmetic happens in
//! integer cents so the codec round-trips exactly.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a monetary amount using the Brazilian convention.
///
/// The amount is rounded half-away-from-zero at the cent boundary, then
/// rendered with a `.` thousands separator, a `,` decimal separator, and
/// exactly two fraction digits. Negative amounts carry a leading `-`
/// before the currency symbol.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(1000, 0)), "R$ 1.000,00");
/// assert_eq!(format_currency(Decimal::new(123456, 2)), "R$ 1.234,56");
/// assert_eq!(format_currency(Decimal::ZERO), "R$ 0,00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let cents = to_cents(amount);
    let magnitude = cents.unsigned_abs();
    let integral = group_thousands(magnitude / 100);
    let fraction = magnitude % 100;
    if cents < 0 {
        format!("-R$ {integral},{fraction:02}")
    } else {
        format!("R$ {integral},{fraction:02}")
    }
}

/// Strips all non-digit characters from a currency string.
pub fn unformat_currency(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Parses user-entered currency text into a decimal amount.
///
/// The parser is digit-count-driven, not separator-aware: every non-digit
/// character (currency symbol, separators, anything else) is discarded and
/// the remaining digit string is read as an integer number of cents. So
/// `"1234"` parses to `12.34`, not `1234.00` — callers are expected to
/// feed values produced by a masked numeric-entry input that appends raw
/// keystrokes to a cents buffer.
///
/// Empty or all-non-digit input parses to zero, as do digit strings too
/// long for the cents representation. The result is never negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::parse_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_currency("R$ 1.000,00"), Decimal::new(100000, 2));
/// assert_eq!(parse_currency("1234"), Decimal::new(1234, 2));
/// assert_eq!(parse_currency(""), Decimal::ZERO);
/// ```
pub fn parse_currency(text: &str) -> Decimal {
    let digits = unformat_currency(text);
    let digits = digits.trim_start_matches('0');
    match digits.parse::<i64>() {
        Ok(cents) => Decimal::new(cents, 2),
        Err(_) => Decimal::ZERO,
    }
}

/// Rounds to the cent boundary and returns the amount as integer cents.
fn to_cents(amount: Decimal) -> i128 {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let mut cents = rounded.mantissa();
    // round_dp leaves the scale at most 2; widen smaller scales to cents.
    for _ in rounded.scale()..2 {
        cents *= 10;
    }
    cents
}

/// Inserts a `.` between every group of three digits, counting from the right.
fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_whole_amount() {
        assert_eq!(format_currency(dec("1000")), "R$ 1.000,00");
    }

    #[test]
    fn test_format_amount_with_cents() {
        assert_eq!(format_currency(dec("1234.56")), "R$ 1.234,56");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_currency(dec("0")), "R$ 0,00");
    }

    #[test]
    fn test_format_amount_under_one_thousand() {
        assert_eq!(format_currency(dec("99.99")), "R$ 99,99");
    }

    #[test]
    fn test_format_millions_groups_twice() {
        assert_eq!(format_currency(dec("1000000")), "R$ 1.000.000,00");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec("0.005")), "R$ 0,01");
        assert_eq!(format_currency(dec("1.004")), "R$ 1,00");
        assert_eq!(format_currency(dec("1.006")), "R$ 1,01");
    }

    #[test]
    fn test_format_negative_amount() {
        assert_eq!(format_currency(dec("-1234.5")), "-R$ 1.234,50");
    }

    #[test]
    fn test_format_sub_cent_amount() {
        assert_eq!(format_currency(dec("0.001")), "R$ 0,00");
    }

    #[test]
    fn test_unformat_strips_symbol_and_separators() {
        assert_eq!(unformat_currency("R$ 1.000,00"), "100000");
    }

    #[test]
    fn test_parse_formatted_amount() {
        assert_eq!(parse_currency("R$ 1.000,00"), dec("1000.00"));
        assert_eq!(parse_currency("1.000,00"), dec("1000.00"));
    }

    #[test]
    fn test_parse_is_digit_count_driven() {
        // Four raw digits are cents, not whole units.
        assert_eq!(parse_currency("1234"), dec("12.34"));
    }

    #[test]
    fn test_parse_empty_input_is_zero() {
        assert_eq!(parse_currency(""), Decimal::ZERO);
    }

    #[test]
    fn test_parse_non_digit_input_is_zero() {
        assert_eq!(parse_currency("abc"), Decimal::ZERO);
        assert_eq!(parse_currency("R$ "), Decimal::ZERO);
    }

    #[test]
    fn test_parse_ignores_leading_zeros() {
        assert_eq!(parse_currency("000000000000000000000123"), dec("1.23"));
    }

    #[test]
    fn test_parse_oversized_digit_string_is_zero() {
        assert_eq!(parse_currency("99999999999999999999999999"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_never_negative() {
        assert_eq!(parse_currency("-1234"), dec("12.34"));
    }

    #[test]
    fn test_round_trip_two_decimal_amounts() {
        for s in ["0", "0.01", "19.90", "1000", "1234.56", "987654.32"] {
            let amount = dec(s);
            assert_eq!(parse_currency(&format_currency(amount)), amount);
        }
    }
}
