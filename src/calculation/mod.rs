//! Calculation logic for the payroll engine.
//!
//! This module contains the payroll calculators: taxable base-salary
//! derivation from gross salary, pension discount, and dependents;
//! progressive IRRF withholding over the monthly bracket table; and the
//! composition point that derives a full employee record from raw input.

mod base_salary;
mod derive;
mod withholding;

pub use base_salary::{calculate_base_salary, dependent_deduction};
pub use derive::derive_employee_record;
pub use withholding::{TaxBracket, bracket_for, calculate_withholding, tax_brackets};
