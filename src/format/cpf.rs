//! CPF formatting and validation.
//!
//! A CPF is the Brazilian national taxpayer identifier: 11 digits,
//! conventionally displayed as `ddd.ddd.ddd-dd`. These functions are
//! display conveniences, not validators — only the length is checked,
//! never the check digits.

/// Formats a CPF for display as `ddd.ddd.ddd-dd`.
///
/// All non-digit characters are stripped first. If exactly 11 digits
/// remain, the punctuated form is returned; otherwise the input is
/// returned unchanged. This function never fails and never truncates.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::format_cpf;
///
/// assert_eq!(format_cpf("12345678901"), "123.456.789-01");
/// assert_eq!(format_cpf("123.456.789-01"), "123.456.789-01");
/// assert_eq!(format_cpf("123456789"), "123456789");
/// ```
pub fn format_cpf(raw: &str) -> String {
    let digits = unformat_cpf(raw);
    if digits.len() != 11 {
        return raw.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Strips all non-digit characters from a CPF.
///
/// Always returns a digits-only string, regardless of length. This is the
/// canonical form used as a registry key.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::unformat_cpf;
///
/// assert_eq!(unformat_cpf("123.456.789-01"), "12345678901");
/// assert_eq!(unformat_cpf("abc123"), "123");
/// ```
pub fn unformat_cpf(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Returns true if the CPF contains exactly 11 digits.
///
/// Only the digit count is checked; no check-digit verification is
/// performed.
pub fn is_valid_cpf(raw: &str) -> bool {
    unformat_cpf(raw).len() == 11
}
