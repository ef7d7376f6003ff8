//! Sick-Leave Compensation Calculator
//!
//! This crate computes Estonian sick-leave compensation: how many days of an
//! event are paid by the employer and by the health-insurance fund, the daily
//! allowance, and the resulting amounts. A presenter binds the calculation to
//! a form through output and notification traits.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presenter;
pub mod validation;
