//! Saved quotes: persistence seam and summary statistics

mod repository;
mod summary;

pub use repository::{JsonlQuoteRepository, MemoryQuoteRepository, QuoteRepository};
pub use summary::{QuoteSummary, ServiceTypeSummary};
