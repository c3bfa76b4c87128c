//! Error types for the Tuition Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during fee calculation and
//! configuration loading.

use thiserror::Error;

/// The main error type for the Tuition Pricing Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tuition_engine::error::EngineError;
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

    /// The quote request failed a precondition before any calculation began.
    ///
    /// This is a normal user-input outcome, not a system fault.
    #[error("Invalid pricing request: {message}")]
    InvalidRequest {
        /// A human-readable description of the rejected input.
        message: String,
    },

    /// No subjects matched the class, selection, and active-status constraints.
    ///
    /// Like [`EngineError::InvalidRequest`], this reflects bad input and is
    /// not retryable.
    #[error("No subjects found for class '{class_level}' matching the selected criteria")]
    NotFound {
        /// The class level the request asked for.
        class_level: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
