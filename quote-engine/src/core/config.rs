use crate::pricing::{
    DEFAULT_EXPRESS_FACTOR, DEFAULT_TAX_RATE, DEFAULT_URGENT_FACTOR, PricingConfig, UrgencyFactors,
};

/// Quote engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | ENVIRONMENT | development | Runtime environment |
/// | RATE_RULES_PATH | data/rate_rules.json | Rate card file (seeded if missing) |
/// | QUOTES_PATH | data/quotes.jsonl | Saved quote output (JSON lines) |
/// | QUOTE_GENERATED_BY | system | `generated_by` stamp on saved quotes |
/// | QUOTE_TAX_RATE | 0.08 | Tax rate as a fraction |
/// | QUOTE_EXPRESS_FACTOR | 1.3 | Express urgency factor |
/// | QUOTE_URGENT_FACTOR | 1.6 | Urgent urgency factor |
/// | LOG_LEVEL | info | Log level / filter |
/// | LOG_JSON | false | JSON log output (forced on in production) |
/// | LOG_DIR | (unset) | Daily rolling log directory |
///
/// # Example
///
/// ```ignore
/// QUOTE_TAX_RATE=0.1 LOG_LEVEL=debug cargo run -- requests.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub rate_rules_path: String,
    pub quotes_path: String,
    pub generated_by: String,
    /// Tax rate and urgency factors; validated when the engine is built
    pub pricing: PricingConfig,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables use their defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let parse_f64 = |key: &str, default: f64| get(key).and_then(|v| v.parse().ok()).unwrap_or(default);

        Self {
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            rate_rules_path: get("RATE_RULES_PATH").unwrap_or_else(|| "data/rate_rules.json".into()),
            quotes_path: get("QUOTES_PATH").unwrap_or_else(|| "data/quotes.jsonl".into()),
            generated_by: get("QUOTE_GENERATED_BY").unwrap_or_else(|| "system".into()),
            pricing: PricingConfig {
                tax_rate: parse_f64("QUOTE_TAX_RATE", DEFAULT_TAX_RATE),
                urgency: UrgencyFactors {
                    express: parse_f64("QUOTE_EXPRESS_FACTOR", DEFAULT_EXPRESS_FACTOR),
                    urgent: parse_f64("QUOTE_URGENT_FACTOR", DEFAULT_URGENT_FACTOR),
                },
            },
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: get("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: get("LOG_DIR").filter(|dir| !dir.is_empty()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// JSON log output: requested via LOG_JSON, always on in production
    pub fn json_logs(&self) -> bool {
        self.log_json || self.is_production()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
