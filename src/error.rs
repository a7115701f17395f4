//! Custom error types for pocketbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for pocketbook operations
#[derive(Error, Debug)]
pub enum PocketbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user-supplied fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Deletion index outside the ledger's 1-based range
    #[error("Invalid index {index}: ledger has {len} record(s)")]
    InvalidIndex { index: usize, len: usize },

    /// A backing document exists but cannot be parsed
    #[error("Corrupt store {path}: {reason}")]
    CorruptStore { path: String, reason: String },
}

impl PocketbookError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a corrupt-store error for a document path
    pub fn corrupt_store(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorruptStore {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a corrupt-store error
    pub fn is_corrupt_store(&self) -> bool {
        matches!(self, Self::CorruptStore { .. })
    }
}

impl From<std::io::Error> for PocketbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for pocketbook operations
pub type PocketbookResult<T> = Result<T, PocketbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PocketbookError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_index_display() {
        let err = PocketbookError::InvalidIndex { index: 5, len: 2 };
        assert_eq!(err.to_string(), "Invalid index 5: ledger has 2 record(s)");
    }

    #[test]
    fn test_corrupt_store() {
        let err = PocketbookError::corrupt_store("ledger.json", "expected value at line 1");
        assert!(err.is_corrupt_store());
        assert_eq!(
            err.to_string(),
            "Corrupt store ledger.json: expected value at line 1"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PocketbookError = io_err.into();
        assert!(matches!(err, PocketbookError::Io(_)));
    }
}
