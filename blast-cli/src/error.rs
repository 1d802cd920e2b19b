//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Delimiter regex that does not compile
    InvalidDelimiter(String),
    /// Configuration error
    ConfigError(String),
    /// Segmentation error from the API
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::InvalidDelimiter(msg) => write!(f, "Invalid delimiter pattern: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<blast_api::ApiError> for CliError {
    fn from(err: blast_api::ApiError) -> Self {
        if err.is_invalid_pattern() {
            CliError::InvalidDelimiter(err.to_string())
        } else {
            CliError::ProcessingError(err.to_string())
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
