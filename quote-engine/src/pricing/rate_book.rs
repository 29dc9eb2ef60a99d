//! Rate Book
//!
//! A validated rule set: every rule passes validation, ids are unique and
//! each service type has at most one active rule. Built once when rules are
//! loaded so per-quote lookups skip the duplicate scan.

use std::collections::{HashMap, HashSet};

use shared::models::{QuoteRequest, RateRule};
use shared::quote::PriceCalculation;

use super::engine::PricingEngine;
use super::error::{PricingError, PricingResult};
use crate::utils::validation::{validate_quote_request, validate_rate_rule};

#[derive(Debug, Clone, Default)]
pub struct RateBook {
    rules: Vec<RateRule>,
    /// service_type -> index of its active rule
    active: HashMap<String, usize>,
}

impl RateBook {
    pub fn new(rules: Vec<RateRule>) -> PricingResult<Self> {
        let mut ids = HashSet::with_capacity(rules.len());
        let mut active: HashMap<String, usize> = HashMap::new();

        for (index, rule) in rules.iter().enumerate() {
            validate_rate_rule(rule)?;

            if !ids.insert(rule.id) {
                return Err(PricingError::invalid_rule(rule.id, "id", "is not unique"));
            }

            if !rule.active {
                continue;
            }
            if let Some(&existing) = active.get(&rule.service_type) {
                let rule_ids = rules
                    .iter()
                    .filter(|r| r.active && r.service_type == rule.service_type)
                    .map(|r| r.id)
                    .collect();
                tracing::warn!(
                    service_type = %rule.service_type,
                    first = rules[existing].id,
                    second = rule.id,
                    "Duplicate active rate rules"
                );
                return Err(PricingError::DuplicateActiveRule {
                    service_type: rule.service_type.clone(),
                    rule_ids,
                });
            }
            active.insert(rule.service_type.clone(), index);
        }

        Ok(Self { rules, active })
    }

    pub fn rules(&self) -> &[RateRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&RateRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// The active rule for a service type
    pub fn active_rule(&self, service_type: &str) -> Option<&RateRule> {
        self.active.get(service_type).map(|&index| &self.rules[index])
    }

    /// Service types that currently have an active rule, sorted
    pub fn service_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.active.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Price a request; `Ok(None)` when no active rule covers its service type.
    pub fn quote(
        &self,
        engine: &PricingEngine,
        request: &QuoteRequest,
    ) -> PricingResult<Option<PriceCalculation>> {
        match self.active_rule(&request.service_type) {
            Some(rule) => engine.calculate_with_rule(request, rule).map(Some),
            None => {
                validate_quote_request(request)?;
                tracing::debug!(service_type = %request.service_type, "No active rate rule, quote not applicable");
                Ok(None)
            }
        }
    }
}
