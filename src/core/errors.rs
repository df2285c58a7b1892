//! Error types for the simhash-rs library.
//!
//! Fingerprint computation is total and never fails. Errors only arise around
//! it: loading, saving and validating configuration.

use std::io;

use thiserror::Error;

/// Main result type for simhash operations.
pub type Result<T> = std::result::Result<T, SimHashError>;

/// Error type for all fallible simhash operations.
#[derive(Error, Debug)]
pub enum SimHashError {
    /// I/O related errors (reading or writing configuration files)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data format being serialized
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field that failed validation
        field: Option<String>,
    },
}

impl SimHashError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new validation error naming the offending field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Prefix the error message with additional context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        match &mut self {
            Self::Io { message, .. }
            | Self::Serialization { message, .. }
            | Self::Validation { message, .. } => {
                *message = format!("{context}: {message}");
            }
        }
        self
    }
}

impl From<io::Error> for SimHashError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_yaml::Error> for SimHashError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SimHashError::validation_field("Empty stop word", "stop_words");
        if let SimHashError::Validation { message, field } = err {
            assert_eq!(message, "Empty stop word");
            assert_eq!(field, Some("stop_words".to_string()));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_io_error_creation() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Access denied");
        let err = SimHashError::io("Failed to write file", io_err);

        if let SimHashError::Io { message, source } = &err {
            assert_eq!(message, "Failed to write file");
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        } else {
            panic!("Expected Io error");
        }
    }

    #[test]
    fn test_with_context_prefixes_message() {
        let err = SimHashError::validation_field("bad width", "mode").with_context("simhash.yml");
        assert_eq!(err.to_string(), "Validation error: simhash.yml: bad width");
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<i32>("invalid: yaml: content").unwrap_err();
        let err: SimHashError = yaml_err.into();

        if let SimHashError::Serialization { data_type, .. } = err {
            assert_eq!(data_type, Some("YAML".to_string()));
        } else {
            panic!("Expected Serialization error");
        }
    }

    #[test]
    fn test_error_display_formatting() {
        let err = SimHashError::validation_field("Empty entry in stop_words", "stop_words");
        assert_eq!(format!("{err}"), "Validation error: Empty entry in stop_words");
    }
}
