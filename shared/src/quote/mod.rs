//! Quote output types
//!
//! - Price calculations: the engine's computed breakdown
//! - Quote records: a calculation saved as a draft quote

pub mod calculation;
pub mod record;

// Re-exports
pub use calculation::{ChargeComponent, LineItem, PriceCalculation};
pub use record::{QuoteRecord, QuoteStatus};
