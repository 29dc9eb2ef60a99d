//! Saved quote record

use super::calculation::PriceCalculation;
use crate::models::QuoteRequest;
use crate::util::{now_millis, snowflake_id};
use serde::{Deserialize, Serialize};

/// Saved quote lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Draft,
}

/// A priced quote as handed to persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: i64,
    pub request: QuoteRequest,
    pub calculation: PriceCalculation,
    pub generated_by: String,
    /// Unix millis
    pub generated_at: i64,
    pub status: QuoteStatus,
    pub tags: Vec<String>,
}

impl QuoteRecord {
    /// Build a draft record tagged `quote`, `automated` and the service type
    pub fn draft(
        request: QuoteRequest,
        calculation: PriceCalculation,
        generated_by: impl Into<String>,
    ) -> Self {
        let tags = vec![
            "quote".to_string(),
            "automated".to_string(),
            request.service_type.clone(),
        ];
        Self {
            id: snowflake_id(),
            request,
            calculation,
            generated_by: generated_by.into(),
            generated_at: now_millis(),
            status: QuoteStatus::Draft,
            tags,
        }
    }
}
