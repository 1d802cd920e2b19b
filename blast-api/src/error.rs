//! API error types

use std::string::FromUtf8Error;

use blast_core::CoreError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Segmentation failed, in practice because a custom pattern is invalid
    #[error("segmentation error: {0}")]
    Segmentation(#[from] CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A localization catalog could not be read
    #[error("localization error: {0}")]
    Localization(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the error comes from an invalid custom pattern
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(
            self,
            ApiError::Segmentation(CoreError::InvalidPattern { .. })
        )
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_is_detected() {
        let err: ApiError = CoreError::InvalidPattern {
            pattern: "(".to_string(),
            reason: "unclosed group".to_string(),
        }
        .into();
        assert!(err.is_invalid_pattern());
        assert!(err.to_string().starts_with("segmentation error:"));

        let err = ApiError::Config("bad".to_string());
        assert!(!err.is_invalid_pattern());
        assert_eq!(err.to_string(), "configuration error: bad");
    }
}
