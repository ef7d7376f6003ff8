//! Calculation result models for the sick-leave calculator.
//!
//! This module contains the [`CalculationResult`] type holding the
//! compensation breakdown, and the audit types that record how each part of
//! it was derived.

use serde::{Deserialize, Serialize};

/// The compensation breakdown for one sick-leave event.
///
/// Amounts are unrounded floating-point values; rounding happens only when
/// they are presented.
///
/// # Example
///
/// ```
/// use sick_leave_calculator::models::CalculationResult;
///
/// let result = CalculationResult {
///     daily_allowance: 56.0,
///     employer_days: 5,
///     employer_compensation: 280.0,
///     insurance_days: 2,
///     insurance_compensation: 112.0,
///     total: 392.0,
/// };
/// assert_eq!(result.compensated_days(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Per-day compensation after tax withholding.
    pub daily_allowance: f64,
    /// Days compensated by the employer.
    pub employer_days: u64,
    /// Amount paid by the employer (employer_days * daily_allowance).
    pub employer_compensation: f64,
    /// Days compensated by the health-insurance fund.
    pub insurance_days: u64,
    /// Amount paid by the health-insurance fund (insurance_days * daily_allowance).
    pub insurance_compensation: f64,
    /// Total compensation across both payers.
    pub total: f64,
}

impl CalculationResult {
    /// Returns the number of compensated days across both payers.
    pub fn compensated_days(&self) -> u64 {
        self.employer_days + self.insurance_days
    }

    /// Returns true if no day of the event is compensated.
    pub fn is_uncompensated(&self) -> bool {
        self.compensated_days() == 0
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag outcomes that are valid but likely to surprise the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use sick_leave_calculator::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns the step recorded for the given rule, if any.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|step| step.rule_id == rule_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_result() -> CalculationResult {
        CalculationResult {
            daily_allowance: 56.0,
            employer_days: 5,
            employer_compensation: 280.0,
            insurance_days: 2,
            insurance_compensation: 112.0,
            total: 392.0,
        }
    }

    fn create_sample_step(rule_id: &str) -> AuditStep {
        AuditStep {
            step_number: 1,
            rule_id: rule_id.to_string(),
            rule_name: "Daily Allowance".to_string(),
            input: serde_json::json!({"income": 3000.0}),
            output: serde_json::json!({"daily_allowance": 56.0}),
            reasoning: "3000 x 0.7 / 30 x 0.8 = 56".to_string(),
        }
    }

    #[test]
    fn test_compensated_days_sums_both_payers() {
        let result = create_sample_result();
        assert_eq!(result.compensated_days(), 7);
        assert!(!result.is_uncompensated());
    }

    #[test]
    fn test_zero_result_is_uncompensated() {
        let result = CalculationResult {
            daily_allowance: 56.0,
            employer_days: 0,
            employer_compensation: 0.0,
            insurance_days: 0,
            insurance_compensation: 0.0,
            total: 0.0,
        };
        assert!(result.is_uncompensated());
    }

    #[test]
    fn test_result_serializes_with_snake_case_fields() {
        let json = serde_json::to_value(create_sample_result()).unwrap();

        assert_eq!(json["daily_allowance"], 56.0);
        assert_eq!(json["employer_days"], 5);
        assert_eq!(json["insurance_compensation"], 112.0);
        assert_eq!(json["total"], 392.0);
    }

    #[test]
    fn test_result_deserializes_from_json() {
        let json = r#"{
            "daily_allowance": 56.0,
            "employer_days": 5,
            "employer_compensation": 280.0,
            "insurance_days": 2,
            "insurance_compensation": 112.0,
            "total": 392.0
        }"#;
        let result: CalculationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result, create_sample_result());
    }

    #[test]
    fn test_audit_trace_finds_step_by_rule_id() {
        let trace = AuditTrace {
            steps: vec![create_sample_step("daily_allowance")],
            warnings: vec![],
        };

        assert!(trace.step("daily_allowance").is_some());
        assert!(trace.step("day_allocation").is_none());
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "WAITING_PERIOD".to_string(),
            message: "All days fall within the waiting period".to_string(),
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"WAITING_PERIOD\""));
    }
}
