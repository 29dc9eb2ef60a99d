//! Rate-Rule Store
//!
//! File-backed rate card. The whole rule set is re-validated on every edit
//! and only swapped in once the file write succeeds.

use std::path::{Path, PathBuf};

use shared::models::{RateRule, RateRuleUpdate};
use shared::util::now_millis;

use crate::pricing::{PricingError, RateBook};
use crate::storage::{RepoResult, read_json, write_json_atomic};

/// Default rate card shipped with the crate
const DEFAULT_RATE_CARD: &str = include_str!("../../data/rate_rules.json");

/// Parse the bundled default rate card
pub fn default_rate_card() -> RepoResult<Vec<RateRule>> {
    Ok(serde_json::from_str(DEFAULT_RATE_CARD)?)
}

#[derive(Debug)]
pub struct RateRuleStore {
    path: PathBuf,
    book: RateBook,
}

impl RateRuleStore {
    /// Load and validate the rule file at `path`
    pub async fn load(path: impl Into<PathBuf>) -> RepoResult<Self> {
        let path = path.into();
        let rules: Vec<RateRule> = read_json(&path).await?;
        let book = RateBook::new(rules)?;

        tracing::info!(
            path = %path.display(),
            rules = book.len(),
            service_types = ?book.service_types(),
            "Rate rules loaded"
        );
        Ok(Self { path, book })
    }

    /// Load the rule file, writing the default rate card first if it does not exist
    pub async fn load_or_seed(path: impl Into<PathBuf>) -> RepoResult<Self> {
        let path = path.into();
        if !tokio::fs::try_exists(&path).await? {
            let rules = default_rate_card()?;
            write_json_atomic(&path, &rules).await?;
            tracing::info!(path = %path.display(), "Seeded default rate card");
        }
        Self::load(path).await
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn book(&self) -> &RateBook {
        &self.book
    }

    /// Apply an administrator edit to one rule.
    ///
    /// The patched set must still form a valid rate book and be written to
    /// disk; on any failure the store keeps its previous rules.
    pub async fn update(&mut self, id: i64, update: RateRuleUpdate) -> RepoResult<RateRule> {
        let mut rules = self.book.rules().to_vec();
        let rule = rules
            .iter_mut()
            .find(|rule| rule.id == id)
            .ok_or(PricingError::RuleNotFound(id))?;
        rule.apply_update(update, now_millis());
        let updated = rule.clone();

        let book = match RateBook::new(rules) {
            Ok(book) => book,
            Err(e) => {
                tracing::warn!(rule_id = id, error = %e, "Rejected rate rule update");
                return Err(e.into());
            }
        };

        write_json_atomic(&self.path, book.rules()).await?;
        self.book = book;

        tracing::info!(
            rule_id = id,
            service_type = %updated.service_type,
            active = updated.active,
            "Rate rule updated"
        );
        Ok(updated)
    }
}
