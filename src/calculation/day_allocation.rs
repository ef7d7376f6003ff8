//! Sick-leave day allocation functionality.
//!
//! This module checks an event against the maximum event length and splits
//! its days into the uncompensated waiting period, employer-paid days and
//! health-insurance-paid days.

use serde::{Deserialize, Serialize};

use crate::config::CompensationPolicy;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::AuditStep;

/// The tier an event falls into, ordered by ascending day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayTier {
    /// Every day is within the waiting period; nothing is compensated.
    WaitingPeriod,
    /// The event ends within the employer-paid window.
    Employer,
    /// The event continues past the employer-paid window.
    Insurance,
}

/// How the days of an event are split between payers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAllocation {
    /// The tier the event fell into.
    pub tier: DayTier,
    /// Days compensated by the employer.
    pub employer_days: u64,
    /// Days compensated by the health-insurance fund.
    pub insurance_days: u64,
}

/// The result of allocating days, including the audit step.
#[derive(Debug, Clone, PartialEq)]
pub struct DayAllocationResult {
    /// The allocation of days between payers.
    pub allocation: DayAllocation,
    /// The audit step recording this allocation.
    pub audit_step: AuditStep,
}

/// Checks that an event does not exceed the maximum event length.
///
/// Tuberculosis cases use the extended ceiling. An event exactly at the
/// ceiling is allowed.
///
/// # Returns
///
/// Returns the audit step for the check, or `CapacityExceeded` when
/// `days` is above the ceiling.
///
/// # Examples
///
/// ```
/// use sick_leave_calculator::calculation::check_event_length;
/// use sick_leave_calculator::config::CompensationPolicy;
/// use sick_leave_calculator::error::CalculatorError;
///
/// let policy = CompensationPolicy::default();
///
/// assert!(check_event_length(182, false, &policy, 1).is_ok());
/// assert_eq!(
///     check_event_length(200, false, &policy, 1).unwrap_err(),
///     CalculatorError::CapacityExceeded { days: 200, max: 182 }
/// );
/// assert!(check_event_length(200, true, &policy, 1).is_ok());
/// ```
pub fn check_event_length(
    days: u64,
    has_tuberculosis: bool,
    policy: &CompensationPolicy,
    step_number: u32,
) -> CalculatorResult<AuditStep> {
    let max = policy.max_event_length.for_event(has_tuberculosis);

    if days > max {
        return Err(CalculatorError::CapacityExceeded { days, max });
    }

    Ok(AuditStep {
        step_number,
        rule_id: "max_event_length".to_string(),
        rule_name: "Maximum Event Length".to_string(),
        input: serde_json::json!({
            "days": days,
            "has_tuberculosis": has_tuberculosis
        }),
        output: serde_json::json!({
            "max_event_length": max,
            "within_limit": true
        }),
        reasoning: format!(
            "{} days is within the {} day maximum{}",
            days,
            max,
            if has_tuberculosis {
                " for tuberculosis"
            } else {
                ""
            }
        ),
    })
}

/// Splits the days of an event between employer and insurance fund.
///
/// With the statutory policy (3 waiting days, employer pays through day 8):
/// - `days < 4`: nothing is compensated
/// - `4 <= days <= 8`: the employer pays `days - 3`
/// - `days > 8`: the employer pays 5, the insurance fund pays `days - 8`
///
/// The maximum event length is not checked here; see [`check_event_length`].
///
/// # Examples
///
/// ```
/// use sick_leave_calculator::calculation::{allocate_days, DayTier};
/// use sick_leave_calculator::config::CompensationPolicy;
///
/// let result = allocate_days(10, &CompensationPolicy::default(), 1);
/// assert_eq!(result.allocation.tier, DayTier::Insurance);
/// assert_eq!(result.allocation.employer_days, 5);
/// assert_eq!(result.allocation.insurance_days, 2);
/// ```
pub fn allocate_days(
    days: u64,
    policy: &CompensationPolicy,
    step_number: u32,
) -> DayAllocationResult {
    let waiting = policy.waiting_days;
    let last_employer_day = policy.employer_last_day;

    let allocation = if days <= waiting {
        DayAllocation {
            tier: DayTier::WaitingPeriod,
            employer_days: 0,
            insurance_days: 0,
        }
    } else if days <= last_employer_day {
        DayAllocation {
            tier: DayTier::Employer,
            employer_days: days - waiting,
            insurance_days: 0,
        }
    } else {
        DayAllocation {
            tier: DayTier::Insurance,
            employer_days: last_employer_day.saturating_sub(waiting),
            insurance_days: days - last_employer_day,
        }
    };

    let reasoning = match allocation.tier {
        DayTier::WaitingPeriod => format!(
            "{} days is within the {} day waiting period - no compensation",
            days, waiting
        ),
        DayTier::Employer => format!(
            "Days {}-{} paid by employer ({} days)",
            waiting + 1,
            days,
            allocation.employer_days
        ),
        DayTier::Insurance => format!(
            "Days {}-{} paid by employer ({} days), days {}-{} paid by insurance ({} days)",
            waiting + 1,
            last_employer_day,
            allocation.employer_days,
            last_employer_day + 1,
            days,
            allocation.insurance_days
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "day_allocation".to_string(),
        rule_name: "Day Allocation".to_string(),
        input: serde_json::json!({
            "days": days,
            "waiting_days": waiting,
            "employer_last_day": last_employer_day
        }),
        output: serde_json::json!({
            "tier": allocation.tier,
            "employer_days": allocation.employer_days,
            "insurance_days": allocation.insurance_days
        }),
        reasoning,
    };

    DayAllocationResult {
        allocation,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> CompensationPolicy {
        CompensationPolicy::default()
    }

    fn split(days: u64) -> (u64, u64) {
        let allocation = allocate_days(days, &policy(), 1).allocation;
        (allocation.employer_days, allocation.insurance_days)
    }

    #[test]
    fn test_waiting_period_days_are_uncompensated() {
        for days in 0..=3 {
            let result = allocate_days(days, &policy(), 1);
            assert_eq!(result.allocation.tier, DayTier::WaitingPeriod);
            assert_eq!(split(days), (0, 0), "days = {}", days);
        }
    }

    #[test]
    fn test_employer_window_pays_days_after_waiting_period() {
        assert_eq!(split(4), (1, 0));
        assert_eq!(split(5), (2, 0));
        assert_eq!(split(8), (5, 0));
        assert_eq!(
            allocate_days(8, &policy(), 1).allocation.tier,
            DayTier::Employer
        );
    }

    #[test]
    fn test_insurance_pays_from_day_nine() {
        assert_eq!(split(9), (5, 1));
        assert_eq!(split(10), (5, 2));
        assert_eq!(split(182), (5, 174));
        assert_eq!(split(240), (5, 232));
        assert_eq!(
            allocate_days(9, &policy(), 1).allocation.tier,
            DayTier::Insurance
        );
    }

    #[test]
    fn test_allocation_uses_policy_tiers() {
        let custom = CompensationPolicy {
            waiting_days: 1,
            employer_last_day: 10,
            ..CompensationPolicy::default()
        };

        assert_eq!(allocate_days(1, &custom, 1).allocation.employer_days, 0);
        assert_eq!(allocate_days(6, &custom, 1).allocation.employer_days, 5);

        let long = allocate_days(15, &custom, 1).allocation;
        assert_eq!(long.employer_days, 9);
        assert_eq!(long.insurance_days, 5);
    }

    #[test]
    fn test_event_at_standard_maximum_is_allowed() {
        let step = check_event_length(182, false, &policy(), 2).unwrap();

        assert_eq!(step.step_number, 2);
        assert_eq!(step.rule_id, "max_event_length");
        assert_eq!(step.output["max_event_length"], 182);
    }

    #[test]
    fn test_event_above_standard_maximum_is_rejected() {
        assert_eq!(
            check_event_length(183, false, &policy(), 1),
            Err(CalculatorError::CapacityExceeded { days: 183, max: 182 })
        );
    }

    #[test]
    fn test_tuberculosis_extends_maximum() {
        assert!(check_event_length(240, true, &policy(), 1).is_ok());
        assert_eq!(
            check_event_length(241, true, &policy(), 1),
            Err(CalculatorError::CapacityExceeded { days: 241, max: 240 })
        );
    }

    #[test]
    fn test_tuberculosis_reasoning_mentions_extended_maximum() {
        let step = check_event_length(200, true, &policy(), 1).unwrap();
        assert!(step.reasoning.contains("240 day maximum for tuberculosis"));
    }

    #[test]
    fn test_audit_records_tier_and_split() {
        let result = allocate_days(10, &policy(), 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.output["tier"], "insurance");
        assert_eq!(result.audit_step.output["employer_days"], 5);
        assert_eq!(result.audit_step.output["insurance_days"], 2);
        assert_eq!(
            result.audit_step.reasoning,
            "Days 4-8 paid by employer (5 days), days 9-10 paid by insurance (2 days)"
        );
    }

    #[test]
    fn test_audit_tier_uses_serialized_name() {
        let result = allocate_days(2, &policy(), 1);

        assert_eq!(result.audit_step.output["tier"], "waiting_period");
        assert_eq!(
            result.audit_step.output["tier"],
            serde_json::to_value(DayTier::WaitingPeriod).unwrap()
        );
    }

    #[test]
    fn test_audit_reasoning_for_waiting_period() {
        let result = allocate_days(2, &policy(), 1);
        assert!(result.audit_step.reasoning.contains("waiting period"));
    }
}
