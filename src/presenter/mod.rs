//! Presentation layer for the sick-leave calculator.
//!
//! The presenter reads raw form values, runs validation and calculation, and
//! writes formatted results to an output sink. Failures are reported through
//! a notifier and leave the output untouched.

mod form;
mod format;
mod output;

pub use form::{FormInput, Presenter};
pub use format::{AmountFormatter, EstonianFormatter};
pub use output::{
    CAPACITY_EXCEEDED_MESSAGE, INVALID_INPUT_MESSAGE, Notifier, OutputField, OutputSink,
    notification_message,
};
