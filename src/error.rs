//! Error types for the guard-duty compensation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Every failure aborts the whole calculation: a payroll must fully succeed
//! or be entirely rejected, so that nobody is silently under- or over-paid.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the guard-duty compensation engine.
///
/// All operations in the engine return this error type, making it easy to
/// handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use vakt_engine::error::EngineError;
///
/// let error = EngineError::MalformedRate {
///     value: "65,0".to_string(),
/// };
/// assert_eq!(error.to_string(), "Malformed rate value: '65,0'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The form/classification code changed in the middle of the period.
    ///
    /// A guard-duty period is paid under exactly one classification; a
    /// mid-period change means the plan and the timesheet disagree and the
    /// calculation must be rejected.
    #[error("Classification changed mid-period on {date}: expected '{expected}', found '{found}'")]
    ClassificationChanged {
        /// The classification code of the first day in the period.
        expected: String,
        /// The conflicting code that was found.
        found: String,
        /// The date carrying the conflicting code.
        date: NaiveDate,
    },

    /// A scheduled duty day has no matching timesheet entry.
    #[error("No timesheet entry for scheduled duty day {date}")]
    MissingTimesheetDay {
        /// The scheduled date that is missing from the timesheet.
        date: NaiveDate,
    },

    /// A rate value could not be parsed as a decimal.
    #[error("Malformed rate value: '{value}'")]
    MalformedRate {
        /// The offending rate string.
        value: String,
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

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
