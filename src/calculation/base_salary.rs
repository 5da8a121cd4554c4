//! Taxable base-salary calculation.
//!
//! This module derives the IRRF taxable base from gross salary, the
//! social-security discount, and the number of dependents.

use rust_decimal::Decimal;

/// Returns the fixed monthly allowance deducted per dependent.
///
/// The allowance is R$ 189.59 per dependent, as published in the Receita
/// Federal monthly IRRF table.
pub fn dependent_deduction() -> Decimal {
    Decimal::new(18959, 2)
}

/// Calculates the taxable base salary.
///
/// Formula: `gross_salary - pension_discount - dependents * 189.59`.
///
/// No clamping is applied: adversarial inputs (a discount larger than the
/// salary, a huge dependent count) legitimately produce a negative base.
/// The withholding table's exempt bracket already maps any base at or
/// below its threshold to zero tax, negative bases included.
///
/// # Arguments
///
/// * `gross_salary` - The gross monthly salary
/// * `pension_discount` - The monthly social-security (INSS) discount
/// * `dependents` - The number of dependents claimed
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_base_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base = calculate_base_salary(
///     Decimal::from(5000),
///     Decimal::from(500),
///     2,
/// );
/// assert_eq!(base, Decimal::from_str("4120.82").unwrap());
/// ```
pub fn calculate_base_salary(
    gross_salary: Decimal,
    pension_discount: Decimal,
    dependents: u32,
) -> Decimal {
    gross_salary - pension_discount - Decimal::from(dependents) * dependent_deduction()
}
