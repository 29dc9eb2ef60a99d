//! File Storage
//!
//! JSON file helpers shared by the rate-rule store and the quote repository.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{AppError, ErrorCode};
use thiserror::Error;

use crate::pricing::PricingError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Quote not found: {0}")]
    QuoteNotFound(i64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::QuoteNotFound(id) => AppError::new(ErrorCode::QuoteNotFound).with_detail("quote_id", id),
            RepoError::Io(e) => AppError::storage(e.to_string()),
            RepoError::Serialization(e) => AppError::with_message(ErrorCode::StorageCorrupted, e.to_string()),
            RepoError::Pricing(e) => e.into(),
        }
    }
}

/// Read and deserialize a JSON document
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> RepoResult<T> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Serialize and write a JSON document via a temp file + rename, so readers
/// never see a half-written file.
pub async fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> RepoResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let bytes = serde_json::to_vec_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("doc.json");

        let mut doc = BTreeMap::new();
        doc.insert("ground".to_string(), 300);
        write_json_atomic(&path, &doc).await.unwrap();

        let back: BTreeMap<String, i32> = read_json(&path).await.unwrap();
        assert_eq!(back, doc);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_write_slice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.json");
        let ids = vec![3_i64, 1, 2];

        write_json_atomic(&path, ids.as_slice()).await.unwrap();

        let back: Vec<i64> = read_json(&path).await.unwrap();
        assert_eq!(back, ids);
    }

    #[test]
    fn test_quote_not_found_maps_to_quote_code() {
        let app = AppError::from(RepoError::QuoteNotFound(42));
        assert_eq!(app.code, ErrorCode::QuoteNotFound);
        assert_eq!(app.details.unwrap()["quote_id"], serde_json::json!(42));
    }

    #[tokio::test]
    async fn test_read_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result: RepoResult<Vec<i32>> = read_json(&dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(RepoError::Io(_))));
    }

    #[tokio::test]
    async fn test_read_corrupt_maps_to_storage_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let err = read_json::<Vec<i32>>(&path).await.unwrap_err();
        assert!(matches!(err, RepoError::Serialization(_)));
        assert_eq!(AppError::from(err).code, ErrorCode::StorageCorrupted);
    }
}
