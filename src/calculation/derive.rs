//! Employee record derivation.
//!
//! The single composition point of the engine: raw employee input goes in,
//! a full record with the derived payroll fields comes out.

use crate::calculation::{calculate_base_salary, calculate_withholding};
use crate::models::{EmployeeInput, EmployeeRecord};

/// Derives a full employee record from raw input.
///
/// Computes the taxable base from the input fields, then the IRRF
/// withholding from that base, and returns the record with both derived
/// fields populated. Every create and update must go through this
/// function — derived fields are projections of the inputs, never
/// source-of-truth, and computing them anywhere else would let the two
/// drift apart.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::derive_employee_record;
/// use payroll_engine::models::EmployeeInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = derive_employee_record(EmployeeInput {
///     name: "João Silva".to_string(),
///     cpf: "12345678901".to_string(),
///     gross_salary: Decimal::from(5000),
///     pension_discount: Decimal::from(500),
///     dependents: 2,
/// });
/// assert_eq!(record.base_salary, Decimal::from_str("4120.82").unwrap());
/// ```
pub fn derive_employee_record(input: EmployeeInput) -> EmployeeRecord {
    let base_salary =
        calculate_base_salary(input.gross_salary, input.pension_discount, input.dependents);
    let tax_withheld = calculate_withholding(base_salary);

    EmployeeRecord {
        name: input.name,
        cpf: input.cpf,
        gross_salary: input.gross_salary,
        pension_discount: input.pension_discount,
        dependents: input.dependents,
        base_salary,
        tax_withheld,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(gross: &str, discount: &str, dependents: u32) -> EmployeeInput {
        EmployeeInput {
            name: "João Silva".to_string(),
            cpf: "12345678901".to_string(),
            gross_salary: dec(gross),
            pension_discount: dec(discount),
            dependents,
        }
    }

    #[test]
    fn test_derive_populates_both_fields() {
        let record = derive_employee_record(input("5000", "500", 2));

        assert_eq!(record.base_salary, dec("4120.82"));
        // 4120.82 falls in the 22.5% bracket.
        assert_eq!(record.tax_withheld, dec("4120.82") * dec("0.225") - dec("662.77"));
    }

    #[test]
    fn test_derive_preserves_input_fields() {
        let record = derive_employee_record(input("5000", "500", 2));

        assert_eq!(record.name, "João Silva");
        assert_eq!(record.cpf, "12345678901");
        assert_eq!(record.gross_salary, dec("5000"));
        assert_eq!(record.pension_discount, dec("500"));
        assert_eq!(record.dependents, 2);
    }

    #[test]
    fn test_derive_exempt_employee_withholds_nothing() {
        let record = derive_employee_record(input("2500", "250", 3));

        assert_eq!(record.base_salary, dec("1681.23"));
        assert_eq!(record.tax_withheld, dec("0"));
    }

    #[test]
    fn test_derive_withholding_uses_base_not_gross() {
        // Gross is in the 27.5% bracket, but the base drops to 15%.
        let record = derive_employee_record(input("5000", "1500", 1));

        assert_eq!(record.base_salary, dec("3310.41"));
        assert_eq!(record.tax_withheld, dec("3310.41") * dec("0.15") - dec("381.44"));
    }
}
