//! Calculation input model.
//!
//! This module defines the validated input for a single compensation
//! calculation.

use serde::{Deserialize, Serialize};

/// Validated input for a compensation calculation.
///
/// Created fresh per submission, either by the validator from raw form text
/// or directly by callers that already hold numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Average monthly income.
    pub income: f64,
    /// Number of sick-leave days in the event.
    pub days: u64,
    /// Whether the event is a tuberculosis case, which extends the maximum
    /// event length.
    #[serde(default)]
    pub has_tuberculosis: bool,
}

impl CalculationInput {
    /// Creates a new calculation input.
    ///
    /// # Examples
    ///
    /// ```
    /// use sick_leave_calculator::models::CalculationInput;
    ///
    /// let input = CalculationInput::new(3000.0, 10, false);
    /// assert_eq!(input.days, 10);
    /// assert!(!input.has_tuberculosis);
    /// ```
    pub fn new(income: f64, days: u64, has_tuberculosis: bool) -> Self {
        Self {
            income,
            days,
            has_tuberculosis,
        }
    }
}
