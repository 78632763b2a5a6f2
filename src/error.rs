//! Error types for the Pay Annualization Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors only occur at the adapter seams (settings loading, mismatched
//! parallel sequences); the core annualization policy itself never fails —
//! every value/period input resolves to a number or a sentinel.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Pay Annualization Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pay_annualizer::error::EngineError;
///
/// let error = EngineError::SettingsNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Settings file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    SettingsNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    SettingsParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configured sentinel value was not usable as a sentinel.
    ///
    /// Sentinels must be strictly negative so that downstream stages can
    /// recognize them and pass them through unscaled.
    #[error("Invalid sentinel value {value}: sentinels must be negative")]
    InvalidSentinel {
        /// The offending value.
        value: Decimal,
    },

    /// Parallel value/period sequences had different lengths.
    #[error("Sequence length mismatch: {values} values vs {periods} periods")]
    LengthMismatch {
        /// The number of pay values supplied.
        values: usize,
        /// The number of period codes supplied.
        periods: usize,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
