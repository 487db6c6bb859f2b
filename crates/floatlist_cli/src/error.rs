//! Error types for the floatlist CLI.

use floatlist_core::types::ResolveError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Index resolution failed
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Sample file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Malformed sample value
    #[error("Invalid sample: {0}")]
    InvalidSample(String),

    /// Invalid or missing command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Sample file could not be read as CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid sample error
    pub fn invalid_sample(msg: impl Into<String>) -> Self {
        Self::InvalidSample(msg.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::invalid_sample("line 2: 'abc'");
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_from_resolve_error() {
        let err: CliError = ResolveError::EmptySequence.into();
        assert!(matches!(err, CliError::Resolve(ResolveError::EmptySequence)));
        assert!(err.to_string().contains("empty sequence"));
    }
}
