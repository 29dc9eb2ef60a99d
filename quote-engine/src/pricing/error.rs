//! Pricing errors

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while validating inputs or pricing a quote
///
/// "No active rule for this service type" is not an error; it is the
/// `Ok(None)` outcome of a calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Invalid input: {field} {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Invalid rate rule {rule_id}: {field} {reason}")]
    InvalidRule {
        rule_id: i64,
        field: &'static str,
        reason: String,
    },

    #[error("Multiple active rate rules for service type '{service_type}': {rule_ids:?}")]
    DuplicateActiveRule {
        service_type: String,
        rule_ids: Vec<i64>,
    },

    #[error("Rate rule not found: {0}")]
    RuleNotFound(i64),

    #[error("Invalid pricing config: {0}")]
    InvalidConfig(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_rule(rule_id: i64, field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            rule_id,
            field,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PricingError::InvalidInput { .. } => ErrorCode::QuoteInvalidInput,
            PricingError::InvalidRule { .. } => ErrorCode::RateRuleInvalid,
            PricingError::DuplicateActiveRule { .. } => ErrorCode::RateRuleDuplicateActive,
            PricingError::RuleNotFound(_) => ErrorCode::RateRuleNotFound,
            PricingError::InvalidConfig(_) => ErrorCode::ConfigError,
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            PricingError::InvalidInput { field, .. } => app.with_detail("field", field),
            PricingError::InvalidRule { rule_id, field, .. } => {
                app.with_detail("rule_id", rule_id).with_detail("field", field)
            }
            PricingError::DuplicateActiveRule {
                service_type,
                rule_ids,
            } => app
                .with_detail("service_type", service_type)
                .with_detail("rule_ids", rule_ids),
            PricingError::RuleNotFound(id) => app.with_detail("rule_id", id),
            PricingError::InvalidConfig(_) => app,
        }
    }
}
