//! Quote Repository
//!
//! Persistence seam for priced quotes. Saving is separate from pricing: a
//! calculation is complete before it reaches `save`, and a failed save
//! leaves the caller's record untouched.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use shared::quote::QuoteRecord;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::storage::{RepoError, RepoResult};

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn save(&self, record: &QuoteRecord) -> RepoResult<()>;
    async fn find_all(&self) -> RepoResult<Vec<QuoteRecord>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<QuoteRecord>;
}

// =============================================================================
// JSON lines file
// =============================================================================

/// Append-only JSON lines file, one `QuoteRecord` per line
#[derive(Debug)]
pub struct JsonlQuoteRepository {
    path: PathBuf,
    /// Serializes appends so lines never interleave
    write_lock: Mutex<()>,
}

impl JsonlQuoteRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuoteRepository for JsonlQuoteRepository {
    async fn save(&self, record: &QuoteRecord) -> RepoResult<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;

        tracing::debug!(quote_id = record.id, path = %self.path.display(), "Quote saved");
        Ok(())
    }

    async fn find_all(&self) -> RepoResult<Vec<QuoteRecord>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(RepoError::from))
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<QuoteRecord> {
        self.find_all()
            .await?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(RepoError::QuoteNotFound(id))
    }
}

// =============================================================================
// In-memory
// =============================================================================

/// In-memory repository keyed by quote id
#[derive(Debug, Default)]
pub struct MemoryQuoteRepository {
    records: DashMap<i64, QuoteRecord>,
}

impl MemoryQuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl QuoteRepository for MemoryQuoteRepository {
    async fn save(&self, record: &QuoteRecord) -> RepoResult<()> {
        self.records.insert(record.id, record.clone());
        Ok(())
    }

    /// Records ordered by generation time, then id
    async fn find_all(&self) -> RepoResult<Vec<QuoteRecord>> {
        let mut records: Vec<QuoteRecord> = self.records.iter().map(|entry| entry.value().clone()).collect();
        records.sort_by_key(|record| (record.generated_at, record.id));
        Ok(records)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<QuoteRecord> {
        self.records
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(RepoError::QuoteNotFound(id))
    }
}
