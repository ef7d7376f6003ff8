//! Compensation policy configuration for the sick-leave calculator.
//!
//! This module provides functionality to load the compensation policy from a
//! YAML file: income replacement rate, bank-month length, tax withholding,
//! day tiers and maximum event lengths.
//!
//! # Example
//!
//! ```no_run
//! use sick_leave_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ee").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompensationPolicy, MaxEventLength};
