//! Error types for the ZIP Code Eligibility Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rule configuration
//! and job data. The eligibility evaluation itself is a total function over
//! well-formed input and never fails.

use thiserror::Error;

/// The main error type for the ZIP Code Eligibility Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use job_eligibility_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// Job data file was not found at the specified path.
    #[error("Job data file not found: {path}")]
    JobDataNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Job data file could not be parsed.
    #[error("Failed to parse job data file '{path}': {message}")]
    JobDataParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The supplied ZIP code was not exactly five ASCII digits.
    #[error("Invalid ZIP code '{input}': must be exactly five digits")]
    InvalidZipCode {
        /// The rejected input.
        input: String,
    },

    /// A closed-region rule referenced a corridor that is not registered.
    #[error("Closed-region rule '{rule}' references unknown corridor '{corridor}'")]
    UnknownCorridor {
        /// The name of the closed-region rule with the dangling reference.
        rule: String,
        /// The corridor name that was not found.
        corridor: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
