//! Output fields and the collaborators the presenter writes to.

use std::collections::BTreeMap;

use crate::error::CalculatorError;

/// Notification shown when income or days is not an unsigned integer.
pub const INVALID_INPUT_MESSAGE: &str = "Input is not a number!";

/// Notification shown when days exceed the maximum event length.
pub const CAPACITY_EXCEEDED_MESSAGE: &str = "Days can't be bigger than max allowed!";

/// A display field the presenter writes to.
///
/// Variants are declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputField {
    /// Days compensated by the employer.
    EmployerDays,
    /// Days compensated by the health-insurance fund.
    InsuranceDays,
    /// The daily allowance. Sinks showing it in several places fan it out.
    DailyAllowance,
    /// Amount paid by the employer.
    EmployerCompensation,
    /// Amount paid by the health-insurance fund.
    InsuranceCompensation,
    /// Total compensation.
    Total,
    /// Echo of the submitted days text.
    TotalDays,
}

impl OutputField {
    /// Every field, in display order.
    pub const ALL: [OutputField; 7] = [
        OutputField::EmployerDays,
        OutputField::InsuranceDays,
        OutputField::DailyAllowance,
        OutputField::EmployerCompensation,
        OutputField::InsuranceCompensation,
        OutputField::Total,
        OutputField::TotalDays,
    ];

    /// Returns the machine-readable key for the field.
    pub fn key(&self) -> &'static str {
        match self {
            OutputField::EmployerDays => "employer_days",
            OutputField::InsuranceDays => "insurance_days",
            OutputField::DailyAllowance => "daily_allowance",
            OutputField::EmployerCompensation => "employer_compensation",
            OutputField::InsuranceCompensation => "insurance_compensation",
            OutputField::Total => "total",
            OutputField::TotalDays => "total_days",
        }
    }

    /// Returns the human-readable label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            OutputField::EmployerDays => "Employer days",
            OutputField::InsuranceDays => "Health insurance days",
            OutputField::DailyAllowance => "Daily allowance",
            OutputField::EmployerCompensation => "Employer compensation",
            OutputField::InsuranceCompensation => "Health insurance compensation",
            OutputField::Total => "Total",
            OutputField::TotalDays => "Total days",
        }
    }
}

/// Receives formatted values for display.
pub trait OutputSink {
    /// Writes `text` into `field`, replacing any previous value.
    fn write(&mut self, field: OutputField, text: &str);
}

/// Shows a blocking, user-facing notification.
pub trait Notifier {
    /// Notifies the user with `message`.
    fn notify(&mut self, message: &str);
}

impl OutputSink for BTreeMap<OutputField, String> {
    fn write(&mut self, field: OutputField, text: &str) {
        self.insert(field, text.to_string());
    }
}

impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Returns the notification text for a failed submission.
pub fn notification_message(error: &CalculatorError) -> String {
    match error {
        CalculatorError::InvalidInput { .. } => INVALID_INPUT_MESSAGE.to_string(),
        CalculatorError::CapacityExceeded { .. } => CAPACITY_EXCEEDED_MESSAGE.to_string(),
        other => other.to_string(),
    }
}
