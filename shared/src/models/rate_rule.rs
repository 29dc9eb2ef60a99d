//! Rate Rule Model

use serde::{Deserialize, Serialize};

/// Rate rule entity: how one service type's price is computed
///
/// Fractional fields (`fuel_surcharge`, `volume_discount_rate`) are 0-1,
/// e.g. `0.15` means 15%. `seasonal_adjustment` is a multiplicative factor
/// where `1.0` means no adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRule {
    pub id: i64,
    /// Display name, shown on the base price line of a breakdown
    pub name: String,
    /// Category key: ground, air, ocean, specialized, ...
    pub service_type: String,
    /// Flat starting charge
    pub base_price: f64,
    /// Charge per weight unit (lbs)
    pub weight_multiplier: f64,
    /// Charge per distance unit (miles)
    pub distance_multiplier: f64,
    /// Informational only. Urgency factors come from the pricing config.
    #[serde(default = "default_factor")]
    pub urgency_multiplier: f64,
    /// Volume (cubic ft) at or above which the volume discount applies
    pub volume_discount_threshold: f64,
    pub volume_discount_rate: f64,
    pub fuel_surcharge: f64,
    #[serde(default = "default_factor")]
    pub seasonal_adjustment: f64,
    pub active: bool,
    /// Last edit (Unix millis)
    #[serde(default)]
    pub last_updated: i64,
}

fn default_factor() -> f64 {
    1.0
}

/// Update rate rule payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateRuleUpdate {
    pub name: Option<String>,
    pub service_type: Option<String>,
    pub base_price: Option<f64>,
    pub weight_multiplier: Option<f64>,
    pub distance_multiplier: Option<f64>,
    pub urgency_multiplier: Option<f64>,
    pub volume_discount_threshold: Option<f64>,
    pub volume_discount_rate: Option<f64>,
    pub fuel_surcharge: Option<f64>,
    pub seasonal_adjustment: Option<f64>,
    pub active: Option<bool>,
}

impl RateRule {
    /// Apply an update payload, stamping `last_updated`
    pub fn apply_update(&mut self, update: RateRuleUpdate, updated_at: i64) {
        let RateRuleUpdate {
            name,
            service_type,
            base_price,
            weight_multiplier,
            distance_multiplier,
            urgency_multiplier,
            volume_discount_threshold,
            volume_discount_rate,
            fuel_surcharge,
            seasonal_adjustment,
            active,
        } = update;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = service_type {
            self.service_type = v;
        }
        if let Some(v) = base_price {
            self.base_price = v;
        }
        if let Some(v) = weight_multiplier {
            self.weight_multiplier = v;
        }
        if let Some(v) = distance_multiplier {
            self.distance_multiplier = v;
        }
        if let Some(v) = urgency_multiplier {
            self.urgency_multiplier = v;
        }
        if let Some(v) = volume_discount_threshold {
            self.volume_discount_threshold = v;
        }
        if let Some(v) = volume_discount_rate {
            self.volume_discount_rate = v;
        }
        if let Some(v) = fuel_surcharge {
            self.fuel_surcharge = v;
        }
        if let Some(v) = seasonal_adjustment {
            self.seasonal_adjustment = v;
        }
        if let Some(v) = active {
            self.active = v;
        }
        self.last_updated = updated_at;
    }
}
