//! The form presenter.

use serde::{Deserialize, Serialize};

use crate::calculation::{AuditedCalculation, calculate_with_audit};
use crate::config::CompensationPolicy;
use crate::error::CalculatorResult;
use crate::models::CalculationResult;
use crate::validation::validate_input;

use super::format::{AmountFormatter, EstonianFormatter};
use super::output::{Notifier, OutputField, OutputSink, notification_message};

/// Raw values read from the calculator form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    /// Average income as typed by the user.
    pub income: String,
    /// Number of sick-leave days as typed by the user.
    pub days: String,
    /// Whether the tuberculosis box is checked.
    #[serde(default)]
    pub has_tuberculosis: bool,
}

impl FormInput {
    /// Creates form input from raw text.
    pub fn new(income: impl Into<String>, days: impl Into<String>, has_tuberculosis: bool) -> Self {
        Self {
            income: income.into(),
            days: days.into(),
            has_tuberculosis,
        }
    }
}

/// Binds the calculator to an output sink and a notifier.
///
/// Each [`submit`](Presenter::submit) is independent: it validates the form,
/// calculates, and on success writes every [`OutputField`]. On failure it
/// notifies the user once and writes nothing.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use sick_leave_calculator::presenter::{FormInput, OutputField, Presenter};
///
/// let output: BTreeMap<OutputField, String> = BTreeMap::new();
/// let notifier: Vec<String> = Vec::new();
/// let mut presenter = Presenter::new(output, notifier);
///
/// presenter.submit(&FormInput::new("3000", "10", false))?;
///
/// assert_eq!(presenter.output()[&OutputField::Total], "392,00");
/// assert!(presenter.notifier().is_empty());
/// # Ok::<(), sick_leave_calculator::error::CalculatorError>(())
/// ```
#[derive(Debug)]
pub struct Presenter<O, N, F = EstonianFormatter> {
    output: O,
    notifier: N,
    formatter: F,
    policy: CompensationPolicy,
}

impl<O: OutputSink, N: Notifier> Presenter<O, N> {
    /// Creates a presenter using the statutory policy and Estonian formatting.
    pub fn new(output: O, notifier: N) -> Self {
        Self::with_formatter(output, notifier, EstonianFormatter)
    }
}

impl<O: OutputSink, N: Notifier, F: AmountFormatter> Presenter<O, N, F> {
    /// Creates a presenter with a custom amount formatter.
    pub fn with_formatter(output: O, notifier: N, formatter: F) -> Self {
        Self {
            output,
            notifier,
            formatter,
            policy: CompensationPolicy::default(),
        }
    }

    /// Replaces the compensation policy used for calculation.
    pub fn with_policy(mut self, policy: CompensationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Handles one form submission.
    ///
    /// # Returns
    ///
    /// Returns the calculation result that was rendered, or the error that
    /// was reported to the notifier:
    /// - `InvalidInput` if income or days is not an unsigned integer
    /// - `CapacityExceeded` if days exceed the maximum event length
    pub fn submit(&mut self, form: &FormInput) -> CalculatorResult<CalculationResult> {
        self.submit_audited(form).map(|audited| audited.result)
    }

    /// Handles one form submission, also returning the audit trace.
    pub fn submit_audited(&mut self, form: &FormInput) -> CalculatorResult<AuditedCalculation> {
        let outcome = validate_input(&form.income, &form.days, form.has_tuberculosis)
            .and_then(|input| calculate_with_audit(&input, &self.policy));

        match outcome {
            Ok(audited) => {
                self.render(&audited.result, &form.days);
                Ok(audited)
            }
            Err(error) => {
                self.notifier.notify(&notification_message(&error));
                Err(error)
            }
        }
    }

    fn render(&mut self, result: &CalculationResult, days_text: &str) {
        let daily_allowance = self.formatter.format(result.daily_allowance);
        let employer_compensation = self.formatter.format(result.employer_compensation);
        let insurance_compensation = self.formatter.format(result.insurance_compensation);
        let total = self.formatter.format(result.total);

        self.output
            .write(OutputField::EmployerDays, &result.employer_days.to_string());
        self.output
            .write(OutputField::InsuranceDays, &result.insurance_days.to_string());
        self.output.write(OutputField::DailyAllowance, &daily_allowance);
        self.output
            .write(OutputField::EmployerCompensation, &employer_compensation);
        self.output
            .write(OutputField::InsuranceCompensation, &insurance_compensation);
        self.output.write(OutputField::Total, &total);
        self.output.write(OutputField::TotalDays, days_text);
    }

    /// Returns the output sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the compensation policy in use.
    pub fn policy(&self) -> &CompensationPolicy {
        &self.policy
    }

    /// Consumes the presenter, returning the output sink and notifier.
    pub fn into_parts(self) -> (O, N) {
        (self.output, self.notifier)
    }
}
