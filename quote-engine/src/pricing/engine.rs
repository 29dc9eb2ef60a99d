//! Pricing Engine
//!
//! Entry point for pricing a quote request against a list of rate rules.
//! Stateless apart from its config: every call reads only its arguments, so
//! one engine can be shared freely across threads and called on every
//! keystroke.

use shared::models::{QuoteRequest, RateRule};
use shared::quote::PriceCalculation;

use super::calculator::calculate_price;
use super::config::PricingConfig;
use super::error::PricingResult;
use super::matcher::select_rule;
use crate::utils::validation::{validate_quote_request, validate_rate_rule};

#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create an engine, rejecting an invalid config
    pub fn new(config: PricingConfig) -> PricingResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price a request against a rule list.
    ///
    /// # Returns
    /// - `Ok(Some(calculation))` when exactly one active rule matches
    /// - `Ok(None)` when no active rule covers the service type; callers
    ///   must not show a price
    ///
    /// # Errors
    /// - `InvalidInput` for negative / non-finite quantities
    /// - `DuplicateActiveRule` when several active rules share the service type
    /// - `InvalidRule` when the selected rule has unusable numbers
    pub fn calculate(
        &self,
        request: &QuoteRequest,
        rules: &[RateRule],
    ) -> PricingResult<Option<PriceCalculation>> {
        validate_quote_request(request)?;

        let Some(rule) = select_rule(rules, &request.service_type)? else {
            tracing::debug!(
                service_type = %request.service_type,
                "No active rate rule, quote not applicable"
            );
            return Ok(None);
        };

        validate_rate_rule(rule)?;
        Ok(Some(calculate_price(request, rule, &self.config)))
    }

    /// Price a request against a rule the caller already selected.
    pub fn calculate_with_rule(
        &self,
        request: &QuoteRequest,
        rule: &RateRule,
    ) -> PricingResult<PriceCalculation> {
        validate_quote_request(request)?;
        validate_rate_rule(rule)?;
        Ok(calculate_price(request, rule, &self.config))
    }
}

/// Price a request with the default config (8% tax, standard urgency table).
pub fn calculate(
    request: &QuoteRequest,
    rules: &[RateRule],
) -> PricingResult<Option<PriceCalculation>> {
    PricingEngine::default().calculate(request, rules)
}
