//! Rate rule configuration

mod store;

pub use store::{RateRuleStore, default_rate_card};
