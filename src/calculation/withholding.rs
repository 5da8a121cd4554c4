//! Progressive IRRF withholding calculation.
//!
//! This module maps a taxable base salary through the five-bracket monthly
//! IRRF table. Each bracket carries a marginal rate and a fixed deductible
//! parcel that keeps the tax curve continuous across bracket boundaries.

use rust_decimal::Decimal;

/// One row of the monthly IRRF table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBracket {
    /// Inclusive upper bound of the bracket, or `None` for the open-ended
    /// top bracket.
    pub ceiling: Option<Decimal>,
    /// Marginal rate applied to the whole base.
    pub rate: Decimal,
    /// Fixed parcel subtracted to keep the curve continuous.
    pub deductible: Decimal,
}

/// Returns the monthly IRRF table, ascending by ceiling.
///
/// Values follow the Receita Federal monthly table in force since
/// February 2024: exempt up to 2,259.20; then 7.5%, 15%, 22.5%, and 27.5%
/// with their respective deductible parcels.
pub fn tax_brackets() -> [TaxBracket; 5] {
    [
        TaxBracket {
            ceiling: Some(Decimal::new(225920, 2)),
            rate: Decimal::ZERO,
            deductible: Decimal::ZERO,
        },
        TaxBracket {
            ceiling: Some(Decimal::new(282665, 2)),
            rate: Decimal::new(75, 3),
            deductible: Decimal::new(16944, 2),
        },
        TaxBracket {
            ceiling: Some(Decimal::new(375105, 2)),
            rate: Decimal::new(15, 2),
            deductible: Decimal::new(38144, 2),
        },
        TaxBracket {
            ceiling: Some(Decimal::new(466468, 2)),
            rate: Decimal::new(225, 3),
            deductible: Decimal::new(66277, 2),
        },
        TaxBracket {
            ceiling: None,
            rate: Decimal::new(275, 3),
            deductible: Decimal::new(89600, 2),
        },
    ]
}

/// Selects the bracket a taxable base falls into.
///
/// Brackets are scanned in ascending ceiling order and the first whose
/// ceiling is greater than or equal to `base` wins; bases above every
/// ceiling land in the open-ended top bracket. Boundary values therefore
/// belong to the lower bracket: a base of exactly 2,826.65 is taxed at
/// 7.5%, while 2,826.66 is taxed at 15%.
pub fn bracket_for(base: Decimal) -> TaxBracket {
    let brackets = tax_brackets();
    let position = brackets
        .iter()
        .position(|bracket| bracket.ceiling.is_none_or(|ceiling| base <= ceiling))
        .unwrap_or(brackets.len() - 1);
    brackets[position]
}

/// Calculates the monthly IRRF withholding for a taxable base salary.
///
/// Returns `base * rate - deductible` for the selected bracket, as exact
/// decimal arithmetic with no rounding — rounding to cents happens only at
/// the formatting boundary. Any base at or below 2,259.20 (negative bases
/// included) falls in the exempt bracket and yields zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_withholding;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(calculate_withholding(Decimal::from(1000)), Decimal::ZERO);
/// assert_eq!(
///     calculate_withholding(Decimal::from(5000)),
///     Decimal::from_str("479.00").unwrap(),
/// );
/// ```
pub fn calculate_withholding(base: Decimal) -> Decimal {
    let bracket = bracket_for(base);
    base * bracket.rate - bracket.deductible
}
