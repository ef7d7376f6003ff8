//! Input validation for raw form values.
//!
//! Income and days arrive as text. Both must be non-empty strings of ASCII
//! digits before any calculation is attempted.

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::CalculationInput;

/// Form field name for the average income.
pub const INCOME_FIELD: &str = "income";

/// Form field name for the number of sick-leave days.
pub const DAYS_FIELD: &str = "days";

/// Returns true if `raw` is a non-empty string of ASCII digits.
///
/// # Examples
///
/// ```
/// use sick_leave_calculator::validation::is_unsigned_integer;
///
/// assert!(is_unsigned_integer("3000"));
/// assert!(is_unsigned_integer("007"));
/// assert!(!is_unsigned_integer(""));
/// assert!(!is_unsigned_integer("12.5"));
/// assert!(!is_unsigned_integer("-4"));
/// ```
pub fn is_unsigned_integer(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Checks a single raw form value.
///
/// # Returns
///
/// Returns the value unchanged, or `InvalidInput` naming the field if it is
/// empty or contains anything other than digits.
pub fn validate_unsigned<'a>(field: &str, raw: &'a str) -> CalculatorResult<&'a str> {
    if is_unsigned_integer(raw) {
        Ok(raw)
    } else {
        Err(CalculatorError::InvalidInput {
            field: field.to_string(),
            value: raw.to_string(),
        })
    }
}

/// Validates raw income and days text and converts them into a
/// [`CalculationInput`].
///
/// Income is checked first and must fit a finite `f64`. A days value too
/// large to count saturates to `u64::MAX`, leaving the calculator to reject
/// it as exceeding the maximum event length.
///
/// # Examples
///
/// ```
/// use sick_leave_calculator::validation::validate_input;
///
/// let input = validate_input("3000", "10", false)?;
/// assert_eq!(input.income, 3000.0);
/// assert_eq!(input.days, 10);
///
/// assert!(validate_input("3000", "ten", false).is_err());
/// # Ok::<(), sick_leave_calculator::error::CalculatorError>(())
/// ```
pub fn validate_input(
    income: &str,
    days: &str,
    has_tuberculosis: bool,
) -> CalculatorResult<CalculationInput> {
    let income_text = validate_unsigned(INCOME_FIELD, income)?;
    let days_text = validate_unsigned(DAYS_FIELD, days)?;

    // Digit strings past f64 range parse to infinity; reject those too.
    let income = income_text
        .parse::<f64>()
        .ok()
        .filter(|income| income.is_finite())
        .ok_or_else(|| CalculatorError::InvalidInput {
            field: INCOME_FIELD.to_string(),
            value: income_text.to_string(),
        })?;

    // Digits only at this point, so parsing can only fail on overflow.
    let days = days_text.parse::<u64>().unwrap_or(u64::MAX);

    Ok(CalculationInput::new(income, days, has_tuberculosis))
}
