//! Error types

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error type handed to consumers of the quote engine, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (offending field, service type, ...)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from(self.code)
    }

    // ==================== Convenience constructors ====================

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::QuoteNotFound);
        assert_eq!(err.message, "Quote not found");
        assert!(err.details.is_none());
        assert_eq!(err.category(), ErrorCategory::Quote);
    }

    #[test]
    fn test_with_detail_accumulates() {
        let err = AppError::with_message(ErrorCode::QuoteInvalidInput, "weight must not be negative")
            .with_detail("field", "weight")
            .with_detail("value", -1.0);
        let details = err.details.unwrap();
        assert_eq!(details.get("field"), Some(&Value::from("weight")));
        assert_eq!(details.get("value"), Some(&Value::from(-1.0)));
    }

    #[test]
    fn test_storage_error() {
        let err = AppError::storage("disk full");
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(err.category(), ErrorCategory::System);
    }
}
