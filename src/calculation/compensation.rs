//! Compensation calculation functionality.
//!
//! This module combines the daily allowance, the event length check and the
//! day allocation into the final [`CalculationResult`].

use tracing::debug;

use crate::config::CompensationPolicy;
use crate::error::CalculatorResult;
use crate::models::{AuditStep, AuditTrace, AuditWarning, CalculationInput, CalculationResult};

use super::daily_allowance::calculate_daily_allowance;
use super::day_allocation::{DayTier, allocate_days, check_event_length};

/// A calculation result together with the audit trace explaining it.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditedCalculation {
    /// The compensation breakdown.
    pub result: CalculationResult,
    /// Every decision made while producing the result.
    pub audit_trace: AuditTrace,
}

/// Calculates compensation under the statutory policy.
///
/// Fails with `CapacityExceeded` when `days` is above 182, or above 240 for
/// tuberculosis cases. Events of 0-3 days succeed with an all-zero result.
///
/// # Examples
///
/// ```
/// use sick_leave_calculator::calculation::calculate;
///
/// let result = calculate(3000.0, 10, false)?;
/// assert_eq!(result.daily_allowance, 56.0);
/// assert_eq!(result.employer_days, 5);
/// assert_eq!(result.insurance_days, 2);
/// assert_eq!(result.employer_compensation, 280.0);
/// assert_eq!(result.insurance_compensation, 112.0);
/// assert_eq!(result.total, 392.0);
/// # Ok::<(), sick_leave_calculator::error::CalculatorError>(())
/// ```
pub fn calculate(
    income: f64,
    days: u64,
    has_tuberculosis: bool,
) -> CalculatorResult<CalculationResult> {
    calculate_with_policy(
        &CalculationInput::new(income, days, has_tuberculosis),
        &CompensationPolicy::default(),
    )
}

/// Calculates compensation under the given policy.
pub fn calculate_with_policy(
    input: &CalculationInput,
    policy: &CompensationPolicy,
) -> CalculatorResult<CalculationResult> {
    calculate_with_audit(input, policy).map(|audited| audited.result)
}

/// Calculates compensation and records the audit trace.
///
/// # Returns
///
/// Returns an `AuditedCalculation`, or an error if:
/// - the policy is invalid (`InvalidPolicy`)
/// - the event exceeds the maximum event length (`CapacityExceeded`)
///
/// # Examples
///
/// ```
/// use sick_leave_calculator::calculation::calculate_with_audit;
/// use sick_leave_calculator::config::CompensationPolicy;
/// use sick_leave_calculator::models::CalculationInput;
///
/// let input = CalculationInput::new(3000.0, 10, false);
/// let audited = calculate_with_audit(&input, &CompensationPolicy::default())?;
///
/// assert_eq!(audited.audit_trace.steps.len(), 4);
/// assert_eq!(audited.audit_trace.steps[0].rule_id, "daily_allowance");
/// # Ok::<(), sick_leave_calculator::error::CalculatorError>(())
/// ```
pub fn calculate_with_audit(
    input: &CalculationInput,
    policy: &CompensationPolicy,
) -> CalculatorResult<AuditedCalculation> {
    policy.validate()?;

    let mut steps: Vec<AuditStep> = Vec::with_capacity(4);
    let mut warnings: Vec<AuditWarning> = Vec::new();

    let allowance = calculate_daily_allowance(input.income, policy, 1);
    let daily_allowance = allowance.daily_allowance;
    steps.push(allowance.audit_step);

    steps.push(check_event_length(
        input.days,
        input.has_tuberculosis,
        policy,
        2,
    )?);

    let allocation_result = allocate_days(input.days, policy, 3);
    let allocation = allocation_result.allocation;
    steps.push(allocation_result.audit_step);

    if allocation.tier == DayTier::WaitingPeriod && input.days > 0 {
        warnings.push(AuditWarning {
            code: "WAITING_PERIOD".to_string(),
            message: format!(
                "All {} days fall within the {} day waiting period and are not compensated",
                input.days, policy.waiting_days
            ),
        });
    }

    let compensated_days = allocation.employer_days + allocation.insurance_days;
    let result = CalculationResult {
        daily_allowance,
        employer_days: allocation.employer_days,
        employer_compensation: allocation.employer_days as f64 * daily_allowance,
        insurance_days: allocation.insurance_days,
        insurance_compensation: allocation.insurance_days as f64 * daily_allowance,
        total: compensated_days as f64 * daily_allowance,
    };

    steps.push(AuditStep {
        step_number: 4,
        rule_id: "compensation".to_string(),
        rule_name: "Compensation Totals".to_string(),
        input: serde_json::json!({
            "daily_allowance": daily_allowance,
            "employer_days": result.employer_days,
            "insurance_days": result.insurance_days
        }),
        output: serde_json::json!({
            "employer_compensation": result.employer_compensation,
            "insurance_compensation": result.insurance_compensation,
            "total": result.total
        }),
        reasoning: format!(
            "{} compensated days x {} = {}",
            compensated_days, daily_allowance, result.total
        ),
    });

    debug!(
        days = input.days,
        has_tuberculosis = input.has_tuberculosis,
        employer_days = result.employer_days,
        insurance_days = result.insurance_days,
        total = result.total,
        "Compensation calculated"
    );

    Ok(AuditedCalculation {
        result,
        audit_trace: AuditTrace { steps, warnings },
    })
}
