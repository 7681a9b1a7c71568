//! Core error types for weekgen-core.
//!
//! Generation itself never fails; these errors cover the surfaces around it:
//! configuration, validation of caller input, and exporting to a calendar store.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for weekgen-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Export-related errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end ({end}) must be greater than start ({start})")]
    InvalidTimeRange {
        start: chrono::NaiveDateTime,
        end: chrono::NaiveDateTime,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors raised while handing events to a calendar store.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The store refused access
    #[error("Calendar access was denied. Please grant permission in Settings.")]
    AccessDenied,

    /// A single record could not be saved
    #[error("Failed to save '{title}': {message}")]
    SaveFailed { title: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_denied_message_matches_user_facing_text() {
        let err = CoreError::from(ExportError::AccessDenied);
        assert_eq!(
            err.to_string(),
            "Export error: Calendar access was denied. Please grant permission in Settings."
        );
    }

    #[test]
    fn validation_error_names_field() {
        let err = ValidationError::InvalidValue {
            field: "gym_frequency".into(),
            message: "must be between 1 and 7, got 9".into(),
        };
        assert!(err.to_string().contains("gym_frequency"));
    }
}
