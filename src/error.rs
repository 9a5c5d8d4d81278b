//! Error types for the wage compliance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during wage calculation.

use thiserror::Error;

/// The main error type for the wage compliance engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use wage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/wages.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/wages.yaml");
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

    /// Two wage records share the same `(province, normalized note)` key.
    #[error("Duplicate wage record for province '{province}' (note: {note:?})")]
    DuplicateWageRecord {
        /// The province shared by the duplicate records.
        province: String,
        /// The normalized note shared by the duplicate records, if any.
        note: Option<String>,
    },

    /// A province key did not resolve to any wage record.
    #[error("Province not found: {key}")]
    ProvinceNotFound {
        /// The composite province key that failed to resolve.
        key: String,
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
