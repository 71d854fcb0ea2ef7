//! Error types for rapid_textteaser
//!
//! This module defines the error types used throughout the library.
//! Degenerate inputs (empty documents, empty titles, unknown languages) are
//! not errors; only invalid configuration and broken segmenter output are.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Main error type for rapid_textteaser
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizerError {
    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The segmenter (or a pre-tokenized document) violated its contract
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SummarizerError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a malformed input error
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller's input rather than
    /// by configuration
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MalformedInput { .. } | Self::Serialization { .. })
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummarizerError::invalid_config("top_k must be > 0");
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(err.to_string().contains("top_k must be > 0"));

        let err = SummarizerError::malformed_input("sentence 3 out of order");
        assert!(err.to_string().starts_with("Malformed input"));
    }

    #[test]
    fn test_is_input_error() {
        assert!(SummarizerError::malformed_input("x").is_input_error());
        assert!(SummarizerError::serialization("x").is_input_error());
        assert!(!SummarizerError::invalid_config("x").is_input_error());
    }

    #[test]
    fn test_from_serde_json() {
        let err: SummarizerError = serde_json::from_str::<Vec<u32>>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, SummarizerError::Serialization { .. }));
    }
}
