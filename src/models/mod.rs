//! Core data models for the sick-leave calculator.
//!
//! This module contains the domain models used throughout the calculator.

mod calculation_input;
mod calculation_result;

pub use calculation_input::CalculationInput;
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
