//! Pricing configuration
//!
//! The tax rate and urgency factors used by every calculation. Rate rules
//! are not part of this config; they come from the rate-rule store.

use serde::{Deserialize, Serialize};
use shared::models::Urgency;

use super::error::{PricingError, PricingResult};

/// Default tax rate applied to the subtotal (8%)
pub const DEFAULT_TAX_RATE: f64 = 0.08;
pub const DEFAULT_EXPRESS_FACTOR: f64 = 1.3;
pub const DEFAULT_URGENT_FACTOR: f64 = 1.6;

/// Upper bound for an urgency factor
pub const MAX_URGENCY_FACTOR: f64 = 100.0;

/// Urgency factor table
///
/// `standard` is fixed at 1.0 so a standard quote never carries an urgency
/// charge. The rule's own `urgency_multiplier` is not consulted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrgencyFactors {
    #[serde(default = "default_express")]
    pub express: f64,
    #[serde(default = "default_urgent")]
    pub urgent: f64,
}

fn default_express() -> f64 {
    DEFAULT_EXPRESS_FACTOR
}

fn default_urgent() -> f64 {
    DEFAULT_URGENT_FACTOR
}

fn default_tax_rate() -> f64 {
    DEFAULT_TAX_RATE
}

impl Default for UrgencyFactors {
    fn default() -> Self {
        Self {
            express: DEFAULT_EXPRESS_FACTOR,
            urgent: DEFAULT_URGENT_FACTOR,
        }
    }
}

impl UrgencyFactors {
    pub fn factor(&self, urgency: Urgency) -> f64 {
        match urgency {
            Urgency::Standard => 1.0,
            Urgency::Express => self.express,
            Urgency::Urgent => self.urgent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Fraction of the subtotal charged as tax
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    #[serde(default)]
    pub urgency: UrgencyFactors,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            urgency: UrgencyFactors::default(),
        }
    }
}

impl PricingConfig {
    pub fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn validate(&self) -> PricingResult<()> {
        if !self.tax_rate.is_finite() || !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(PricingError::InvalidConfig(format!(
                "tax_rate must be between 0 and 1, got {}",
                self.tax_rate
            )));
        }
        for (name, factor) in [("express", self.urgency.express), ("urgent", self.urgency.urgent)] {
            if !factor.is_finite() || !(0.0..=MAX_URGENCY_FACTOR).contains(&factor) {
                return Err(PricingError::InvalidConfig(format!(
                    "{name} urgency factor must be between 0 and {MAX_URGENCY_FACTOR}, got {factor}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factors() {
        let factors = UrgencyFactors::default();
        assert_eq!(factors.factor(Urgency::Standard), 1.0);
        assert_eq!(factors.factor(Urgency::Express), 1.3);
        assert_eq!(factors.factor(Urgency::Urgent), 1.6);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = PricingConfig::default();
        assert_eq!(config.tax_rate, 0.08);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_tax_rate() {
        for rate in [-0.01, 1.5, f64::NAN, f64::INFINITY] {
            let config = PricingConfig::default().with_tax_rate(rate);
            assert!(matches!(config.validate(), Err(PricingError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_rejects_bad_urgency_factor() {
        let mut config = PricingConfig::default();
        config.urgency.urgent = f64::NAN;
        assert!(config.validate().is_err());

        config.urgency.urgent = 1.6;
        config.urgency.express = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: PricingConfig = serde_json::from_str(r#"{"tax_rate":0.1}"#).unwrap();
        assert_eq!(config.tax_rate, 0.1);
        assert_eq!(config.urgency, UrgencyFactors::default());

        let config: PricingConfig =
            serde_json::from_str(r#"{"urgency":{"express":1.25}}"#).unwrap();
        assert_eq!(config.tax_rate, DEFAULT_TAX_RATE);
        assert_eq!(config.urgency.express, 1.25);
        assert_eq!(config.urgency.urgent, DEFAULT_URGENT_FACTOR);
    }
}
