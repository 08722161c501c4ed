//! Custom error types for Hisabi
//!
//! This module defines the application-level error hierarchy using thiserror.
//! Calculation failures from the engine itself live in
//! [`crate::services::amortization::PayoffError`]; they are returned as
//! values and converted to [`HisabiError::Calculation`] only at the CLI
//! boundary.

use thiserror::Error;

use crate::services::amortization::PayoffError;

/// The main error type for Hisabi operations
#[derive(Error, Debug)]
pub enum HisabiError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input (bad numbers, unknown locale, etc.)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A payoff calculation rejected its inputs
    #[error("Calculation error: {0}")]
    Calculation(#[from] PayoffError),
}

impl HisabiError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this wraps a calculation failure
    pub fn is_calculation(&self) -> bool {
        matches!(self, Self::Calculation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for HisabiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HisabiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Hisabi operations
pub type HisabiResult<T> = Result<T, HisabiError>;
