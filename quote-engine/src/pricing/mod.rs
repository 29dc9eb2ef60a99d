//! Quote Pricing Module
//!
//! Deterministic price calculation for freight quote requests.
//! Rules are injected by the caller (rate-rule store or a plain slice);
//! nothing in this module performs I/O.

mod calculator;
mod config;
mod engine;
mod error;
pub mod matcher;
pub mod money;
mod rate_book;


pub use calculator::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use matcher::*;
pub use rate_book::*;
