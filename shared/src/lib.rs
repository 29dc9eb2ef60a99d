//! Shared types for the freight quote workspace
//!
//! Domain models (rate rules, quote requests, price calculations, saved
//! quotes), the unified error system, and small utilities used by
//! `quote-engine` and any UI layer consuming its output.

pub mod error;
pub mod models;
pub mod quote;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{QuoteRequest, RateRule, RateRuleUpdate, Urgency};
pub use quote::{ChargeComponent, LineItem, PriceCalculation, QuoteRecord, QuoteStatus};
