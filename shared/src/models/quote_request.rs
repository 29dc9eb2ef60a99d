//! Quote Request Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested delivery speed tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Standard,
    Express,
    Urgent,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Standard => "standard",
            Urgency::Express => "express",
            Urgency::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shipment quote request (transient, created per calculation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub service_type: String,
    /// Weight in lbs
    pub weight: f64,
    /// Distance in miles
    pub distance: f64,
    #[serde(default)]
    pub urgency: Urgency,
    /// Volume in cubic ft
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_requirements: Vec<String>,
}

impl QuoteRequest {
    /// Minimal request for a service type; origin/destination left empty
    pub fn new(service_type: impl Into<String>, weight: f64, distance: f64) -> Self {
        Self {
            service_type: service_type.into(),
            weight,
            distance,
            urgency: Urgency::Standard,
            volume: 0.0,
            origin: String::new(),
            destination: String::new(),
            special_requirements: Vec::new(),
        }
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_route(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = origin.into();
        self.destination = destination.into();
        self
    }
}
