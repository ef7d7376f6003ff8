//! Daily allowance calculation functionality.
//!
//! This module derives the per-day sick-leave allowance from average monthly
//! income: the replaced share of income is spread over a bank month and
//! reduced by income tax withholding.

use crate::config::CompensationPolicy;
use crate::models::AuditStep;

/// The result of calculating the daily allowance, including the audit step.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAllowanceResult {
    /// The replaced share of monthly income.
    pub compensation_base: f64,
    /// The per-day allowance after tax withholding.
    pub daily_allowance: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the daily allowance for an average monthly income.
///
/// `compensation_base = income_replacement_rate x income`, then
/// `daily_allowance = (compensation_base / bank_month_days) x net_of_tax_factor`.
/// No rounding is applied.
///
/// # Arguments
///
/// * `income` - Average monthly income
/// * `policy` - The compensation policy providing the rates
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use sick_leave_calculator::calculation::calculate_daily_allowance;
/// use sick_leave_calculator::config::CompensationPolicy;
///
/// let result = calculate_daily_allowance(3000.0, &CompensationPolicy::default(), 1);
/// assert_eq!(result.compensation_base, 2100.0);
/// assert_eq!(result.daily_allowance, 56.0);
/// ```
pub fn calculate_daily_allowance(
    income: f64,
    policy: &CompensationPolicy,
    step_number: u32,
) -> DailyAllowanceResult {
    let compensation_base = policy.income_replacement_rate * income;
    let daily_allowance =
        (compensation_base / f64::from(policy.bank_month_days)) * policy.net_of_tax_factor;

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_allowance".to_string(),
        rule_name: "Daily Allowance".to_string(),
        input: serde_json::json!({
            "income": income,
            "income_replacement_rate": policy.income_replacement_rate,
            "bank_month_days": policy.bank_month_days,
            "net_of_tax_factor": policy.net_of_tax_factor
        }),
        output: serde_json::json!({
            "compensation_base": compensation_base,
            "daily_allowance": daily_allowance
        }),
        reasoning: format!(
            "{} x {} / {} x {} = {}",
            income,
            policy.income_replacement_rate,
            policy.bank_month_days,
            policy.net_of_tax_factor,
            daily_allowance
        ),
    };

    DailyAllowanceResult {
        compensation_base,
        daily_allowance,
        audit_step,
    }
}
