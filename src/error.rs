//! Error types for the sick-leave calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating a submission,
//! calculating compensation, or loading a compensation policy.

use thiserror::Error;

/// The main error type for the sick-leave calculator.
///
/// # Example
///
/// ```
/// use sick_leave_calculator::error::CalculatorError;
///
/// let error = CalculatorError::CapacityExceeded { days: 200, max: 182 };
/// assert_eq!(
///     error.to_string(),
///     "Sick leave of 200 days exceeds the maximum of 182 days"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// A raw form value was empty or contained something other than digits.
    #[error("Invalid input for '{field}': '{value}' is not an unsigned integer")]
    InvalidInput {
        /// The form field that failed validation.
        field: String,
        /// The raw text that was rejected.
        value: String,
    },

    /// The number of sick-leave days exceeds the policy maximum.
    #[error("Sick leave of {days} days exceeds the maximum of {max} days")]
    CapacityExceeded {
        /// The number of days requested.
        days: u64,
        /// The maximum event length that applied.
        max: u64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A policy value parsed but is not usable for calculation.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return CalculatorError.
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_field_and_value() {
        let error = CalculatorError::InvalidInput {
            field: "income".to_string(),
            value: "12a".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input for 'income': '12a' is not an unsigned integer"
        );
    }

    #[test]
    fn test_capacity_exceeded_displays_days_and_max() {
        let error = CalculatorError::CapacityExceeded { days: 241, max: 240 };
        assert_eq!(
            error.to_string(),
            "Sick leave of 241 days exceeds the maximum of 240 days"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = CalculatorError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = CalculatorError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_policy_displays_field_and_message() {
        let error = CalculatorError::InvalidPolicy {
            field: "bank_month_days".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid policy field 'bank_month_days': must be greater than zero"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CalculatorError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_capacity_exceeded() -> CalculatorResult<()> {
            Err(CalculatorError::CapacityExceeded { days: 183, max: 182 })
        }

        fn propagates_error() -> CalculatorResult<()> {
            returns_capacity_exceeded()?;
            Ok(())
        }

        assert_eq!(
            propagates_error(),
            Err(CalculatorError::CapacityExceeded { days: 183, max: 182 })
        );
    }
}
