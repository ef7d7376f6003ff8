//! Monetary amount formatting.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a monetary amount for display.
///
/// Implementations must produce exactly two fractional digits.
pub trait AmountFormatter {
    /// Formats `amount` as display text.
    fn format(&self, amount: f64) -> String;
}

/// Formats amounts the Estonian way: comma as decimal separator, no digit
/// grouping, two fractional digits.
///
/// The shortest decimal representation of the amount is rounded half away
/// from zero, so `1.005` displays as `1,01`.
///
/// # Examples
///
/// ```
/// use sick_leave_calculator::presenter::{AmountFormatter, EstonianFormatter};
///
/// let formatter = EstonianFormatter;
/// assert_eq!(formatter.format(56.0), "56,00");
/// assert_eq!(formatter.format(1234.5), "1234,50");
/// assert_eq!(formatter.format(18.666666666666668), "18,67");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianFormatter;

impl AmountFormatter for EstonianFormatter {
    fn format(&self, amount: f64) -> String {
        let text = match Decimal::from_str(&amount.to_string()) {
            Ok(value) => format!(
                "{:.2}",
                value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            ),
            // Out of Decimal range.
            Err(_) => format!("{:.2}", amount),
        };
        text.replace('.', ",")
    }
}
