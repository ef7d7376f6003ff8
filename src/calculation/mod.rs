//! Calculation logic for the sick-leave calculator.
//!
//! This module contains the daily allowance derivation, the maximum event
//! length check, the tiered split of sick-leave days between employer and
//! health-insurance fund, and the compensation totals built from them.

mod compensation;
mod daily_allowance;
mod day_allocation;

pub use compensation::{AuditedCalculation, calculate, calculate_with_audit, calculate_with_policy};
pub use daily_allowance::{DailyAllowanceResult, calculate_daily_allowance};
pub use day_allocation::{
    DayAllocation, DayAllocationResult, DayTier, allocate_days, check_event_length,
};
