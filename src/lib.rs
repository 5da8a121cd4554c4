//! Payroll engine for Brazilian employee registration.
//!
//! This crate provides the domain core for an employee registry with
//! payroll-tax computation: CPF formatting, BRL currency encoding and
//! decoding, taxable base-salary derivation, and progressive IRRF
//! withholding over the monthly bracket table.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod format;
pub mod models;
pub mod registry;
