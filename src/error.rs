//! Error types for the shift engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while evaluating shifts.

use thiserror::Error;

/// The main error type for the shift engine.
///
/// Window errors are always scoped to a single shift; aggregate operations
/// skip the offending shift instead of failing the whole batch.
///
/// # Example
///
/// ```
/// use shift_engine::error::EngineError;
///
/// let error = EngineError::InvalidClockTime {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid clock time '25:00': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time-of-day value did not match `HH:MM`.
    #[error("Invalid clock time '{value}': expected HH:MM")]
    InvalidClockTime {
        /// The rejected input.
        value: String,
    },

    /// A shift's date/time window cannot be placed on the calendar.
    #[error("Invalid shift window '{shift_id}': {message}")]
    InvalidShiftWindow {
        /// The ID of the offending shift.
        shift_id: String,
        /// What is wrong with the window.
        message: String,
    },

    /// A reporting period key was not a valid ISO date prefix.
    #[error("Invalid period '{value}': expected YYYY, YYYY-MM or YYYY-MM-DD")]
    InvalidPeriod {
        /// The rejected period key.
        value: String,
    },

    /// No template with this key exists in the catalog.
    #[error("Shift template not found: {key}")]
    UnknownShiftTemplate {
        /// The requested template key.
        key: String,
    },

    /// A catalog template is internally inconsistent.
    #[error("Invalid shift template '{key}': {message}")]
    InvalidTemplate {
        /// The template key.
        key: String,
        /// A description of the inconsistency.
        message: String,
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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
