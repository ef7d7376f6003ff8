//! Configuration types for the compensation policy.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, CalculatorResult};

/// Maximum number of sick-leave days in a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxEventLength {
    /// The ceiling for ordinary sick leave.
    pub standard: u64,
    /// The extended ceiling for tuberculosis cases.
    pub tuberculosis: u64,
}

impl MaxEventLength {
    /// Returns the ceiling that applies to an event.
    pub fn for_event(&self, has_tuberculosis: bool) -> u64 {
        if has_tuberculosis {
            self.tuberculosis
        } else {
            self.standard
        }
    }
}

/// The rules used to turn income and sick-leave days into compensation.
///
/// `Default` yields the Estonian statutory policy, identical to
/// `config/ee/policy.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationPolicy {
    /// The human-readable name of the policy.
    pub name: String,
    /// Share of average income replaced while on sick leave.
    pub income_replacement_rate: f64,
    /// Number of days monthly compensation is divided over.
    pub bank_month_days: u32,
    /// Share of the allowance kept after income tax withholding.
    pub net_of_tax_factor: f64,
    /// Leading days of an event that are not compensated.
    pub waiting_days: u64,
    /// Last day of an event paid by the employer. Later days are paid by
    /// the health-insurance fund.
    pub employer_last_day: u64,
    /// Maximum event lengths.
    pub max_event_length: MaxEventLength,
}

impl Default for CompensationPolicy {
    fn default() -> Self {
        Self {
            name: "Estonian statutory sick-leave compensation".to_string(),
            income_replacement_rate: 0.7,
            bank_month_days: 30,
            net_of_tax_factor: 0.8,
            waiting_days: 3,
            employer_last_day: 8,
            max_event_length: MaxEventLength {
                standard: 182,
                tuberculosis: 240,
            },
        }
    }
}

impl CompensationPolicy {
    /// Checks that the policy can be used for calculation.
    ///
    /// # Returns
    ///
    /// Returns `InvalidPolicy` naming the first offending field if:
    /// - a rate is not within (0, 1]
    /// - `bank_month_days` is zero
    /// - `waiting_days` is not below `employer_last_day`
    /// - the standard maximum exceeds the tuberculosis maximum
    pub fn validate(&self) -> CalculatorResult<()> {
        check_rate("income_replacement_rate", self.income_replacement_rate)?;
        check_rate("net_of_tax_factor", self.net_of_tax_factor)?;

        if self.bank_month_days == 0 {
            return Err(invalid("bank_month_days", "must be greater than zero"));
        }

        if self.waiting_days >= self.employer_last_day {
            return Err(invalid(
                "waiting_days",
                format!(
                    "must be less than employer_last_day ({})",
                    self.employer_last_day
                ),
            ));
        }

        if self.max_event_length.standard > self.max_event_length.tuberculosis {
            return Err(invalid(
                "max_event_length",
                "standard must not exceed tuberculosis",
            ));
        }

        Ok(())
    }
}

fn check_rate(field: &str, rate: f64) -> CalculatorResult<()> {
    // Written so NaN fails too.
    if rate > 0.0 && rate <= 1.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{} is not within (0, 1]", rate)))
    }
}

fn invalid(field: &str, message: impl Into<String>) -> CalculatorError {
    CalculatorError::InvalidPolicy {
        field: field.to_string(),
        message: message.into(),
    }
}
