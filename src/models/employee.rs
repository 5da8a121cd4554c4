//! Employee model and related types.
//!
//! This module defines the raw employee input and the stored employee
//! record carrying the derived payroll fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The raw fields supplied when registering or updating an employee.
///
/// Monetary fields are deliberately unconstrained: negative salaries or
/// discounts flow through the calculators unchanged (validation is the
/// caller's concern, typically a form layer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    /// The employee's display name.
    pub name: String,
    /// The employee's CPF, formatted or digits-only.
    pub cpf: String,
    /// Gross monthly salary.
    pub gross_salary: Decimal,
    /// Monthly social-security (INSS) discount.
    pub pension_discount: Decimal,
    /// Number of dependents claimed for the dependent allowance.
    #[serde(default)]
    pub dependents: u32,
}

/// A registered employee, including the derived payroll fields.
///
/// `base_salary` and `tax_withheld` are projections of the input fields,
/// recomputed on every create and update. They are never mutated
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's display name.
    pub name: String,
    /// The employee's CPF. Canonical (digits-only) once stored in a registry.
    pub cpf: String,
    /// Gross monthly salary.
    pub gross_salary: Decimal,
    /// Monthly social-security (INSS) discount.
    pub pension_discount: Decimal,
    /// Number of dependents claimed for the dependent allowance.
    #[serde(default)]
    pub dependents: u32,
    /// Taxable base: gross salary minus pension discount minus the
    /// per-dependent allowance.
    pub base_salary: Decimal,
    /// Monthly IRRF withholding computed from `base_salary`.
    pub tax_withheld: Decimal,
}
