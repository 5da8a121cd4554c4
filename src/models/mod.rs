//! Core data models for the payroll engine.
//!
//! This module contains the employee domain models used throughout the engine.

mod employee;

pub use employee::{EmployeeInput, EmployeeRecord};
