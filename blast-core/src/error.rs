//! Core error types (deterministic only)

use thiserror::Error;

/// Engine errors. Nothing here is transient: retrying the same call
/// produces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A caller-supplied pattern failed to compile
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern text exactly as supplied
        pattern: String,
        /// Compiler diagnostic
        reason: String,
    },

    /// A range does not fit inside the text it is applied to
    #[error("range {start}..{end} out of bounds for text of {len} bytes")]
    OffsetOutOfBounds {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
        /// Length of the text in bytes
        len: usize,
    },

    /// An offset falls inside a multi-byte character
    #[error("byte offset {offset} is not on a character boundary")]
    NotCharBoundary {
        /// The offending byte offset
        offset: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let err = CoreError::InvalidPattern {
            pattern: "(um".to_string(),
            reason: "unclosed group".to_string(),
        };
        assert_eq!(err.to_string(), "invalid pattern `(um`: unclosed group");
    }

    #[test]
    fn test_offset_errors_display() {
        let err = CoreError::OffsetOutOfBounds {
            start: 2,
            end: 9,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "range 2..9 out of bounds for text of 4 bytes"
        );

        let err = CoreError::NotCharBoundary { offset: 1 };
        assert!(err.to_string().contains("character boundary"));
    }
}
