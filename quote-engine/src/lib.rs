//! Freight Quote Engine
//!
//! # Overview
//!
//! - **Pricing** (`pricing`): deterministic quote calculation from a request
//!   and the active rate rule for its service type
//! - **Rate rules** (`rules`): file-backed rate card with validated edits
//! - **Quotes** (`quotes`): saved-quote repository seam and summary statistics
//! - **Batch** (`batch`): prices a list of requests and saves the results
//!
//! # Layout
//!
//! ```text
//! quote-engine/src/
//! ├── core/          # configuration
//! ├── pricing/       # engine, rule matching, breakdown
//! ├── rules/         # rate-rule store
//! ├── quotes/        # repository, summary
//! ├── batch.rs       # batch quoting job
//! ├── storage.rs     # JSON file helpers, RepoError
//! └── utils/         # logging, validation
//! ```

pub mod batch;
pub mod core;
pub mod pricing;
pub mod quotes;
pub mod rules;
pub mod storage;
pub mod utils;

pub use batch::{BatchQuoter, BatchReport, RejectedRequest};
pub use core::Config;
pub use pricing::{PricingConfig, PricingEngine, PricingError, PricingResult, RateBook, calculate};
pub use quotes::{JsonlQuoteRepository, MemoryQuoteRepository, QuoteRepository, QuoteSummary};
pub use rules::RateRuleStore;
pub use storage::{RepoError, RepoResult};

pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// Load `.env`, read configuration and start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    // A missing .env file is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.json_logs(), config.log_dir.as_deref())?;
    Ok(config)
}
