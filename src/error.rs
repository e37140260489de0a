//! Error types for the Timesheet Engine.
//!
//! Business-rule outcomes (hour caps, date eligibility) are reported through
//! [`ValidationResult`](crate::models::ValidationResult) and
//! [`Eligibility`](crate::models::Eligibility). This module covers the
//! remaining failures: malformed caller input and configuration loading.

use thiserror::Error;

/// The main error type for the Timesheet Engine.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time format '25:00': expected HH:mm");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time string did not match the 24-hour `HH:mm` grammar.
    #[error("Invalid time format '{value}': expected HH:mm")]
    InvalidTimeFormat {
        /// The rejected input.
        value: String,
    },

    /// A single clock component was out of range.
    #[error("Invalid {field} value: {value}")]
    InvalidTimeComponent {
        /// The component that was out of range (e.g. "hour").
        field: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// An entry status string was not recognised.
    #[error("Unknown entry status: {value}")]
    UnknownStatus {
        /// The rejected input.
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

    /// A time entry was structurally unusable.
    #[error("Invalid time entry: {message}")]
    InvalidEntry {
        /// A description of what made the entry invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
