//! Unified error system
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 4xxx: Quote errors
//! - 6xxx: Rate rule errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::RateRuleNotFound);
//! assert_eq!(err.message, "Rate rule not found");
//!
//! // Create an error with details
//! let err = AppError::with_message(ErrorCode::QuoteInvalidInput, "weight must not be negative")
//!     .with_detail("field", "weight");
//! assert_eq!(err.code, ErrorCode::QuoteInvalidInput);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
