//! Price calculation output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Charge component of a price breakdown, in breakdown order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeComponent {
    BasePrice,
    WeightCharge,
    DistanceCharge,
    UrgencyCharge,
    FuelSurcharge,
    SeasonalAdjustment,
    VolumeDiscount,
    Taxes,
}

/// One line of a price breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub component: ChargeComponent,
    /// e.g. "Weight Charge (1000 lbs × $0.5)"
    pub label: String,
    /// Unrounded amount; discounts are stored positive
    pub amount: f64,
}

impl LineItem {
    pub fn new(component: ChargeComponent, label: impl Into<String>, amount: f64) -> Self {
        Self {
            component,
            label: label.into(),
            amount,
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.component {
            ChargeComponent::VolumeDiscount => write!(f, "{}: -${:.2}", self.label, self.amount),
            _ => write!(f, "{}: ${:.2}", self.label, self.amount),
        }
    }
}

/// Computed price breakdown for one quote request
///
/// Immutable once produced. Amounts are unrounded; round only for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCalculation {
    pub base_price: f64,
    pub weight_charge: f64,
    pub distance_charge: f64,
    pub urgency_charge: f64,
    pub fuel_surcharge: f64,
    /// Negative when the seasonal factor is below 1
    pub seasonal_adjustment: f64,
    pub volume_discount: f64,
    /// Not clamped; a degenerate rule can drive it negative
    pub subtotal: f64,
    pub taxes: f64,
    pub total_price: f64,
    pub breakdown: Vec<LineItem>,
}

impl PriceCalculation {
    /// Rendered breakdown lines, e.g. `"Taxes (8%): $128.80"`
    pub fn breakdown_lines(&self) -> Vec<String> {
        self.breakdown.iter().map(ToString::to_string).collect()
    }

    /// Find a breakdown line by component
    pub fn line(&self, component: ChargeComponent) -> Option<&LineItem> {
        self.breakdown.iter().find(|item| item.component == component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_display() {
        let fee = LineItem::new(ChargeComponent::FuelSurcharge, "Fuel Surcharge (15.0%)", 210.0);
        assert_eq!(fee.to_string(), "Fuel Surcharge (15.0%): $210.00");

        let discount = LineItem::new(ChargeComponent::VolumeDiscount, "Volume Discount (10.0%)", 140.0);
        assert_eq!(discount.to_string(), "Volume Discount (10.0%): -$140.00");

        let seasonal = LineItem::new(ChargeComponent::SeasonalAdjustment, "Seasonal Adjustment", -75.0);
        assert_eq!(seasonal.to_string(), "Seasonal Adjustment: $-75.00");
    }

    #[test]
    fn test_component_serde() {
        let json = serde_json::to_string(&ChargeComponent::SeasonalAdjustment).unwrap();
        assert_eq!(json, "\"SEASONAL_ADJUSTMENT\"");
    }
}
