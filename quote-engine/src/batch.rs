//! Batch Quoting
//!
//! Prices a list of requests against a rate book and saves each priced quote
//! as a draft. Per-request failures are collected, never fatal.

use std::sync::Arc;

use shared::models::QuoteRequest;
use shared::quote::QuoteRecord;

use crate::pricing::{PricingEngine, PricingError, RateBook};
use crate::quotes::{QuoteRepository, QuoteSummary};

/// A request that failed validation
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRequest {
    /// Position in the input list
    pub index: usize,
    pub error: PricingError,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Priced quotes, in input order
    pub priced: Vec<QuoteRecord>,
    /// Input positions with no active rule
    pub not_applicable: Vec<usize>,
    pub rejected: Vec<RejectedRequest>,
    /// Ids of priced quotes the repository failed to store
    pub save_failures: Vec<i64>,
    pub summary: QuoteSummary,
}

pub struct BatchQuoter {
    engine: PricingEngine,
    repository: Arc<dyn QuoteRepository>,
    generated_by: String,
}

impl BatchQuoter {
    pub fn new(
        engine: PricingEngine,
        repository: Arc<dyn QuoteRepository>,
        generated_by: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            repository,
            generated_by: generated_by.into(),
        }
    }

    pub async fn run(&self, book: &RateBook, requests: Vec<QuoteRequest>) -> BatchReport {
        let mut report = BatchReport::default();

        for (index, request) in requests.into_iter().enumerate() {
            let calculation = match book.quote(&self.engine, &request) {
                Ok(Some(calculation)) => calculation,
                Ok(None) => {
                    tracing::info!(index, service_type = %request.service_type, "Quote not applicable");
                    report.not_applicable.push(index);
                    continue;
                }
                Err(error) => {
                    tracing::warn!(index, error = %error, "Quote request rejected");
                    report.rejected.push(RejectedRequest { index, error });
                    continue;
                }
            };

            let record = QuoteRecord::draft(request, calculation, self.generated_by.as_str());
            if let Err(e) = self.repository.save(&record).await {
                tracing::error!(quote_id = record.id, error = %e, "Failed to save quote");
                report.save_failures.push(record.id);
            }
            report.priced.push(record);
        }

        let mut summary = QuoteSummary::from_records(&report.priced);
        summary.not_applicable = report.not_applicable.len();
        summary.rejected = report.rejected.len();
        report.summary = summary;

        tracing::info!(
            priced = report.priced.len(),
            not_applicable = report.not_applicable.len(),
            rejected = report.rejected.len(),
            save_failures = report.save_failures.len(),
            "Batch quoting finished"
        );
        report
    }
}
