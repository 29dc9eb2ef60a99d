//! Data models
//!
//! Rate rules are configuration records edited by an administrator; quote
//! requests are transient inputs. All IDs are `i64` snowflakes.

pub mod quote_request;
pub mod rate_rule;

// Re-exports
pub use quote_request::*;
pub use rate_rule::*;
