//! Input validation helpers
//!
//! Numeric bounds and text length limits for quote requests and rate rules.
//! Bounds keep every intermediate `Decimal` product far from overflow.

use shared::models::{QuoteRequest, RateRule};

use crate::pricing::{PricingError, PricingResult};

// ── Numeric limits ──────────────────────────────────────────────────

/// Weight, distance and volume on a quote request
pub const MAX_QUANTITY: f64 = 1e9;

/// Prices, per-unit multipliers and thresholds on a rate rule
pub const MAX_RATE_VALUE: f64 = 1e9;

/// Multiplicative factors on a rate rule (seasonal, urgency)
pub const MAX_FACTOR: f64 = 100.0;

// ── Text length limits ──────────────────────────────────────────────

/// Rule names and service type keys
pub const MAX_NAME_LEN: usize = 200;

/// Origin / destination
pub const MAX_ADDRESS_LEN: usize = 500;

/// One special requirement
pub const MAX_NOTE_LEN: usize = 500;

// ── Numeric checks ──────────────────────────────────────────────────

/// Check a value is finite and within `0..=max`; returns the failure reason
fn check_bounded(value: f64, max: f64) -> Result<(), String> {
    if !value.is_finite() {
        return Err("must be a finite number".to_string());
    }
    if value < 0.0 {
        return Err(format!("must not be negative (got {value})"));
    }
    if value > max {
        return Err(format!("must not exceed {max} (got {value})"));
    }
    Ok(())
}

fn check_text(value: &str, max_len: usize, required: bool) -> Result<(), String> {
    if required && value.trim().is_empty() {
        return Err("must not be empty".to_string());
    }
    if value.len() > max_len {
        return Err(format!("is too long ({} chars, max {max_len})", value.len()));
    }
    Ok(())
}

// ── Quote request ───────────────────────────────────────────────────

/// Reject negative, non-finite or out-of-range quantities and oversized text.
pub fn validate_quote_request(request: &QuoteRequest) -> PricingResult<()> {
    let quantities = [
        ("weight", request.weight),
        ("distance", request.distance),
        ("volume", request.volume),
    ];
    for (field, value) in quantities {
        check_bounded(value, MAX_QUANTITY).map_err(|reason| PricingError::invalid_input(field, reason))?;
    }

    check_text(&request.service_type, MAX_NAME_LEN, false)
        .map_err(|reason| PricingError::invalid_input("service_type", reason))?;
    check_text(&request.origin, MAX_ADDRESS_LEN, false)
        .map_err(|reason| PricingError::invalid_input("origin", reason))?;
    check_text(&request.destination, MAX_ADDRESS_LEN, false)
        .map_err(|reason| PricingError::invalid_input("destination", reason))?;
    for requirement in &request.special_requirements {
        check_text(requirement, MAX_NOTE_LEN, false)
            .map_err(|reason| PricingError::invalid_input("special_requirements", reason))?;
    }
    Ok(())
}

// ── Rate rule ───────────────────────────────────────────────────────

/// Check a rate rule's numeric fields are usable.
///
/// Rates are fractions (0-1), factors are non-negative. A seasonal factor far
/// below 1 is accepted even though it can make the subtotal negative.
pub fn validate_rate_rule(rule: &RateRule) -> PricingResult<()> {
    let invalid = |field: &'static str| move |reason: String| PricingError::invalid_rule(rule.id, field, reason);

    check_text(&rule.name, MAX_NAME_LEN, true).map_err(invalid("name"))?;
    check_text(&rule.service_type, MAX_NAME_LEN, true).map_err(invalid("service_type"))?;

    let amounts = [
        ("base_price", rule.base_price),
        ("weight_multiplier", rule.weight_multiplier),
        ("distance_multiplier", rule.distance_multiplier),
        ("volume_discount_threshold", rule.volume_discount_threshold),
    ];
    for (field, value) in amounts {
        check_bounded(value, MAX_RATE_VALUE).map_err(invalid(field))?;
    }

    let fractions = [
        ("volume_discount_rate", rule.volume_discount_rate),
        ("fuel_surcharge", rule.fuel_surcharge),
    ];
    for (field, value) in fractions {
        check_bounded(value, 1.0).map_err(invalid(field))?;
    }

    let factors = [
        ("seasonal_adjustment", rule.seasonal_adjustment),
        ("urgency_multiplier", rule.urgency_multiplier),
    ];
    for (field, value) in factors {
        check_bounded(value, MAX_FACTOR).map_err(invalid(field))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> RateRule {
        RateRule {
            id: 9,
            name: "Air Freight Express".to_string(),
            service_type: "air".to_string(),
            base_price: 500.0,
            weight_multiplier: 2.0,
            distance_multiplier: 0.8,
            urgency_multiplier: 1.5,
            volume_discount_threshold: 5000.0,
            volume_discount_rate: 0.15,
            fuel_surcharge: 0.25,
            seasonal_adjustment: 1.1,
            active: true,
            last_updated: 0,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let request = QuoteRequest::new("air", 120.0, 800.0).with_volume(30.0);
        assert!(validate_quote_request(&request).is_ok());
    }

    #[test]
    fn test_zero_quantities_are_valid() {
        assert!(validate_quote_request(&QuoteRequest::new("ground", 0.0, 0.0)).is_ok());
    }

    #[test]
    fn test_negative_quantities_rejected() {
        let cases = [
            (QuoteRequest::new("ground", -1.0, 10.0), "weight"),
            (QuoteRequest::new("ground", 1.0, -10.0), "distance"),
            (QuoteRequest::new("ground", 1.0, 10.0).with_volume(-0.5), "volume"),
        ];
        for (request, expected) in cases {
            match validate_quote_request(&request) {
                Err(PricingError::InvalidInput { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected InvalidInput for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_finite_and_huge_quantities_rejected() {
        for weight in [f64::NAN, f64::INFINITY, MAX_QUANTITY * 10.0] {
            let request = QuoteRequest::new("ground", weight, 10.0);
            assert!(matches!(
                validate_quote_request(&request),
                Err(PricingError::InvalidInput { field: "weight", .. })
            ));
        }
    }

    #[test]
    fn test_oversized_origin_rejected() {
        let request =
            QuoteRequest::new("ground", 1.0, 1.0).with_route("x".repeat(MAX_ADDRESS_LEN + 1), "Dallas, TX");
        assert!(matches!(
            validate_quote_request(&request),
            Err(PricingError::InvalidInput { field: "origin", .. })
        ));
    }

    #[test]
    fn test_valid_rule_passes() {
        assert!(validate_rate_rule(&rule()).is_ok());
    }

    #[test]
    fn test_rule_fraction_out_of_range() {
        let mut r = rule();
        r.fuel_surcharge = 15.0; // percent instead of fraction
        match validate_rate_rule(&r) {
            Err(PricingError::InvalidRule { rule_id, field, .. }) => {
                assert_eq!(rule_id, 9);
                assert_eq!(field, "fuel_surcharge");
            }
            other => panic!("expected InvalidRule, got {other:?}"),
        }
    }

    #[test]
    fn test_rule_negative_base_price() {
        let mut r = rule();
        r.base_price = -5.0;
        assert!(matches!(
            validate_rate_rule(&r),
            Err(PricingError::InvalidRule { field: "base_price", .. })
        ));
    }

    #[test]
    fn test_rule_low_seasonal_factor_accepted() {
        let mut r = rule();
        r.seasonal_adjustment = 0.0;
        assert!(validate_rate_rule(&r).is_ok());
    }

    #[test]
    fn test_rule_requires_name() {
        let mut r = rule();
        r.name = "  ".to_string();
        assert!(matches!(
            validate_rate_rule(&r),
            Err(PricingError::InvalidRule { field: "name", .. })
        ));
    }
}
