use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use quote_engine::storage::read_json;
use quote_engine::{BatchQuoter, JsonlQuoteRepository, PricingEngine, RateRuleStore, setup_environment};
use shared::models::QuoteRequest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv, config, logging
    let config = setup_environment()?;

    let requests_path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: quote-engine <requests.json>")?;

    tracing::info!(environment = %config.environment, "Quote engine starting");

    // 2. Engine and rate card
    let engine = PricingEngine::new(config.pricing).context("invalid pricing configuration")?;
    let store = RateRuleStore::load_or_seed(&config.rate_rules_path)
        .await
        .with_context(|| format!("failed to load rate rules from {}", config.rate_rules_path))?;

    // 3. Requests
    let requests: Vec<QuoteRequest> = read_json(&requests_path)
        .await
        .with_context(|| format!("failed to read quote requests from {}", requests_path.display()))?;

    // 4. Price and save
    let repository = Arc::new(JsonlQuoteRepository::new(&config.quotes_path));
    let quoter = BatchQuoter::new(engine, repository, config.generated_by.clone());
    let report = quoter.run(store.book(), requests).await;

    for record in &report.priced {
        tracing::info!(
            quote_id = record.id,
            service_type = %record.request.service_type,
            total = %format!("{:.2}", record.calculation.total_price),
            "Quote priced"
        );
    }

    let summary = serde_json::to_string_pretty(&report.summary)?;
    println!("{summary}");

    if !report.save_failures.is_empty() {
        anyhow::bail!("{} quote(s) could not be saved to {}", report.save_failures.len(), config.quotes_path);
    }
    Ok(())
}
