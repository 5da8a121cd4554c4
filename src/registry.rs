//! In-memory employee registry keyed by canonical CPF.
//!
//! The registry is the storage collaborator around the calculators: it
//! canonicalizes CPFs, enforces the unique-key invariant, and routes every
//! create and update through [`derive_employee_record`] so the derived
//! fields can never drift from the inputs.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::info;

use crate::calculation::derive_employee_record;
use crate::error::{EngineError, EngineResult};
use crate::format::{is_valid_cpf, unformat_cpf};
use crate::models::{EmployeeInput, EmployeeRecord};

/// An in-memory employee registry keyed by canonical (digits-only) CPF.
///
/// CPFs are canonicalized on the way in, so formatted and digits-only
/// spellings address the same employee. Records are replaced whole on
/// update; there is no partial-field mutation surface.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::EmployeeInput;
/// use payroll_engine::registry::EmployeeRegistry;
/// use rust_decimal::Decimal;
///
/// let mut registry = EmployeeRegistry::new();
/// registry.register(EmployeeInput {
///     name: "João Silva".to_string(),
///     cpf: "123.456.789-01".to_string(),
///     gross_salary: Decimal::from(5000),
///     pension_discount: Decimal::from(500),
///     dependents: 2,
/// }).unwrap();
///
/// assert!(registry.get("12345678901").is_some());
/// ```
#[derive(Debug, Default, Clone)]
pub struct EmployeeRegistry {
    employees: BTreeMap<String, EmployeeRecord>,
}

impl EmployeeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new employee, deriving the payroll fields.
    ///
    /// The CPF is canonicalized and stored digits-only.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCpf` if the CPF does not contain exactly 11 digits,
    /// or `DuplicateCpf` if an employee is already registered under the
    /// same canonical CPF.
    pub fn register(&mut self, input: EmployeeInput) -> EngineResult<&EmployeeRecord> {
        let canonical = self.canonical_key(&input.cpf)?;
        match self.employees.entry(canonical) {
            Entry::Occupied(entry) => Err(EngineError::DuplicateCpf {
                cpf: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                let record = derive_employee_record(EmployeeInput {
                    cpf: entry.key().clone(),
                    ..input
                });
                info!(cpf = %entry.key(), name = %record.name, "employee registered");
                Ok(entry.insert(record))
            }
        }
    }

    /// Replaces an existing employee's record, re-deriving the payroll
    /// fields from the new input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCpf` if the CPF does not contain exactly 11 digits,
    /// or `EmployeeNotFound` if no employee is registered under it.
    pub fn update(&mut self, input: EmployeeInput) -> EngineResult<&EmployeeRecord> {
        let canonical = self.canonical_key(&input.cpf)?;
        match self.employees.entry(canonical) {
            Entry::Vacant(entry) => Err(EngineError::EmployeeNotFound {
                cpf: entry.into_key(),
            }),
            Entry::Occupied(entry) => {
                let record = derive_employee_record(EmployeeInput {
                    cpf: entry.key().clone(),
                    ..input
                });
                info!(cpf = %entry.key(), name = %record.name, "employee updated");
                let slot = entry.into_mut();
                *slot = record;
                Ok(slot)
            }
        }
    }

    /// Removes an employee by CPF, formatted or digits-only.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if no employee is registered under the
    /// canonical form of the given CPF.
    pub fn remove(&mut self, cpf: &str) -> EngineResult<EmployeeRecord> {
        let canonical = unformat_cpf(cpf);
        match self.employees.remove(&canonical) {
            Some(record) => {
                info!(cpf = %canonical, name = %record.name, "employee removed");
                Ok(record)
            }
            None => Err(EngineError::EmployeeNotFound { cpf: canonical }),
        }
    }

    /// Looks up an employee by CPF, formatted or digits-only.
    pub fn get(&self, cpf: &str) -> Option<&EmployeeRecord> {
        self.employees.get(&unformat_cpf(cpf))
    }

    /// Returns true if an employee is registered under the given CPF.
    pub fn contains(&self, cpf: &str) -> bool {
        self.employees.contains_key(&unformat_cpf(cpf))
    }

    /// Iterates over all records, ordered by canonical CPF.
    pub fn iter(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.employees.values()
    }

    /// Returns the number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employees are registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn canonical_key(&self, cpf: &str) -> EngineResult<String> {
        if !is_valid_cpf(cpf) {
            return Err(EngineError::InvalidCpf {
                cpf: cpf.to_string(),
            });
        }
        Ok(unformat_cpf(cpf))
    }
}
