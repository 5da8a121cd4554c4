//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors only arise at the registry surface: the calculators and codecs
//! are total over their input domain and never fail.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All registry operations return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     cpf: "12345678901".to_string(),
/// };
/// assert_eq!(error.to_string(), "No employee registered for CPF '12345678901'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A CPF used as a registry key did not have exactly 11 digits.
    #[error("Invalid CPF '{cpf}': expected exactly 11 digits")]
    InvalidCpf {
        /// The CPF as supplied by the caller.
        cpf: String,
    },

    /// An employee is already registered under the given CPF.
    #[error("Employee already registered for CPF '{cpf}'")]
    DuplicateCpf {
        /// The canonical (digits-only) CPF that collided.
        cpf: String,
    },

    /// No employee is registered under the given CPF.
    #[error("No employee registered for CPF '{cpf}'")]
    EmployeeNotFound {
        /// The canonical (digits-only) CPF that was looked up.
        cpf: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
