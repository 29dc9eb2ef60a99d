//! Unified error codes
//!
//! Error codes are organized by category:
//! - 4xxx: Quote errors
//! - 6xxx: Rate rule errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the dashboard frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 4xxx: Quote ====================
    /// Quote request carries an invalid weight/distance/volume
    QuoteInvalidInput = 4002,
    /// Saved quote not found
    QuoteNotFound = 4003,

    // ==================== 6xxx: Rate rule ====================
    /// Rate rule not found
    RateRuleNotFound = 6001,
    /// Rate rule has an invalid numeric field
    RateRuleInvalid = 6002,
    /// More than one active rate rule for a service type
    RateRuleDuplicateActive = 6003,

    // ==================== 9xxx: System ====================
    /// Storage (file) error
    StorageError = 9002,
    /// Configuration error
    ConfigError = 9005,
    /// Stored data could not be decoded
    StorageCorrupted = 9403,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // Quote
            ErrorCode::QuoteInvalidInput => "Quote request has invalid input",
            ErrorCode::QuoteNotFound => "Quote not found",

            // Rate rule
            ErrorCode::RateRuleNotFound => "Rate rule not found",
            ErrorCode::RateRuleInvalid => "Rate rule is invalid",
            ErrorCode::RateRuleDuplicateActive => {
                "More than one active rate rule for the same service type"
            }

            // System
            ErrorCode::StorageError => "Storage error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StorageCorrupted => "Stored data is corrupted",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Quote
            4002 => Ok(ErrorCode::QuoteInvalidInput),
            4003 => Ok(ErrorCode::QuoteNotFound),

            // Rate rule
            6001 => Ok(ErrorCode::RateRuleNotFound),
            6002 => Ok(ErrorCode::RateRuleInvalid),
            6003 => Ok(ErrorCode::RateRuleDuplicateActive),

            // System
            9002 => Ok(ErrorCode::StorageError),
            9005 => Ok(ErrorCode::ConfigError),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::QuoteInvalidInput.code(), 4002);
        assert_eq!(ErrorCode::QuoteNotFound.code(), 4003);
        assert_eq!(ErrorCode::RateRuleDuplicateActive.code(), 6003);
        assert_eq!(ErrorCode::StorageCorrupted.code(), 9403);
    }

    #[test]
    fn test_try_from_round_trips_every_code() {
        let all = [
            ErrorCode::QuoteInvalidInput,
            ErrorCode::QuoteNotFound,
            ErrorCode::RateRuleNotFound,
            ErrorCode::RateRuleInvalid,
            ErrorCode::RateRuleDuplicateActive,
            ErrorCode::StorageError,
            ErrorCode::ConfigError,
            ErrorCode::StorageCorrupted,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(4001), Err(InvalidErrorCode(4001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::QuoteNotFound).unwrap();
        assert_eq!(json, "4003");
        let code: ErrorCode = serde_json::from_str("6003").unwrap();
        assert_eq!(code, ErrorCode::RateRuleDuplicateActive);
        assert!(serde_json::from_str::<ErrorCode>("1234").is_err());
    }
}
