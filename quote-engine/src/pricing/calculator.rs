//! Quote Price Calculator
//!
//! Turns a (request, rule, config) triple into a price breakdown:
//! - Linear charges: base price, weight, distance, urgency
//! - Adjustments on the pre-adjustment subtotal: fuel surcharge, seasonal
//!   adjustment, volume discount
//! - Taxes on the adjusted subtotal
//!
//! Uses rust_decimal for every intermediate amount; nothing is rounded.

use rust_decimal::prelude::*;
use shared::models::{QuoteRequest, RateRule};
use shared::quote::{ChargeComponent, LineItem, PriceCalculation};

use super::config::PricingConfig;
use super::money::{percent_one_dp, percent_plain, to_decimal, to_f64};

/// Intermediate amounts of one calculation
#[derive(Debug, Clone, Copy)]
struct Charges {
    base: Decimal,
    weight: Decimal,
    distance: Decimal,
    urgency: Decimal,
    fuel: Decimal,
    seasonal: Decimal,
    volume_discount: Decimal,
    subtotal: Decimal,
    taxes: Decimal,
    total: Decimal,
}

fn compute_charges(request: &QuoteRequest, rule: &RateRule, config: &PricingConfig) -> Charges {
    let base = to_decimal(rule.base_price);
    let urgency_factor = to_decimal(config.urgency.factor(request.urgency));

    // Step 1: Linear charges
    let weight = to_decimal(request.weight) * to_decimal(rule.weight_multiplier);
    let distance = to_decimal(request.distance) * to_decimal(rule.distance_multiplier);
    let urgency = base * (urgency_factor - Decimal::ONE);

    let pre_adjustment = base + weight + distance + urgency;

    // Step 2: Adjustments, all based on the pre-adjustment subtotal
    let fuel = pre_adjustment * to_decimal(rule.fuel_surcharge);
    let seasonal = pre_adjustment * (to_decimal(rule.seasonal_adjustment) - Decimal::ONE);

    // Threshold is inclusive
    let volume_discount = if to_decimal(request.volume) >= to_decimal(rule.volume_discount_threshold) {
        pre_adjustment * to_decimal(rule.volume_discount_rate)
    } else {
        Decimal::ZERO
    };

    // Step 3: Subtotal may go negative on a degenerate rule; not clamped
    let subtotal = pre_adjustment + fuel + seasonal - volume_discount;
    let taxes = subtotal * to_decimal(config.tax_rate);
    let total = subtotal + taxes;

    Charges {
        base,
        weight,
        distance,
        urgency,
        fuel,
        seasonal,
        volume_discount,
        subtotal,
        taxes,
        total,
    }
}

/// Breakdown lines in fixed order; a zero volume discount is left out.
fn build_breakdown(
    request: &QuoteRequest,
    rule: &RateRule,
    config: &PricingConfig,
    charges: &Charges,
) -> Vec<LineItem> {
    let mut lines = Vec::with_capacity(8);

    lines.push(LineItem::new(
        ChargeComponent::BasePrice,
        format!("Base Price ({})", rule.name),
        to_f64(charges.base),
    ));
    lines.push(LineItem::new(
        ChargeComponent::WeightCharge,
        format!("Weight Charge ({} lbs × ${})", request.weight, rule.weight_multiplier),
        to_f64(charges.weight),
    ));
    lines.push(LineItem::new(
        ChargeComponent::DistanceCharge,
        format!(
            "Distance Charge ({} miles × ${})",
            request.distance, rule.distance_multiplier
        ),
        to_f64(charges.distance),
    ));
    lines.push(LineItem::new(
        ChargeComponent::UrgencyCharge,
        format!("Urgency Charge ({})", request.urgency),
        to_f64(charges.urgency),
    ));
    lines.push(LineItem::new(
        ChargeComponent::FuelSurcharge,
        format!("Fuel Surcharge ({}%)", percent_one_dp(rule.fuel_surcharge)),
        to_f64(charges.fuel),
    ));
    lines.push(LineItem::new(
        ChargeComponent::SeasonalAdjustment,
        "Seasonal Adjustment",
        to_f64(charges.seasonal),
    ));
    if !charges.volume_discount.is_zero() {
        lines.push(LineItem::new(
            ChargeComponent::VolumeDiscount,
            format!("Volume Discount ({}%)", percent_one_dp(rule.volume_discount_rate)),
            to_f64(charges.volume_discount),
        ));
    }
    lines.push(LineItem::new(
        ChargeComponent::Taxes,
        format!("Taxes ({}%)", percent_plain(config.tax_rate)),
        to_f64(charges.taxes),
    ));

    lines
}

/// Price a request against an already-selected, validated rule.
pub fn calculate_price(request: &QuoteRequest, rule: &RateRule, config: &PricingConfig) -> PriceCalculation {
    let charges = compute_charges(request, rule, config);
    let breakdown = build_breakdown(request, rule, config, &charges);

    tracing::trace!(
        service_type = %request.service_type,
        rule_id = rule.id,
        subtotal = %charges.subtotal,
        total = %charges.total,
        "Quote priced"
    );

    PriceCalculation {
        base_price: to_f64(charges.base),
        weight_charge: to_f64(charges.weight),
        distance_charge: to_f64(charges.distance),
        urgency_charge: to_f64(charges.urgency),
        fuel_surcharge: to_f64(charges.fuel),
        seasonal_adjustment: to_f64(charges.seasonal),
        volume_discount: to_f64(charges.volume_discount),
        subtotal: to_f64(charges.subtotal),
        taxes: to_f64(charges.taxes),
        total_price: to_f64(charges.total),
        breakdown,
    }
}
