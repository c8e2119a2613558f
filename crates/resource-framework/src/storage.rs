//! # Storage Backends
//!
//! Byte-level key/value storage that snapshots are written to. A backend only knows
//! about opaque blobs under string keys; serialization lives in
//! [`Snapshot`](crate::Snapshot).
//!
//! Two implementations ship with the framework:
//!
//! - [`MemoryBackend`]: process-local map, cloneable so tests can inspect what was written.
//! - [`FileBackend`]: one `<key>.json` file per entry under a base directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;

/// Errors that can occur while reading or writing stored blobs.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The blob could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The backend failed for a reason other than plain I/O.
    #[error("Backend error: {0}")]
    Backend(String),
    /// Filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Low-level interface every storage backend implements.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Reads the blob stored under `key`, or `None` if nothing was ever written.
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replaces the blob stored under `key`.
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;
}

/// In-memory backend.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

/// File-based backend.
///
/// Each key maps to `<base_path>/<key>.json`. Writes go to a sibling `.tmp` file that is
/// then renamed over the target, so a reader never sees a half-written entry on
/// filesystems with atomic rename.
#[derive(Debug, Clone)]
pub struct FileBackend {
    base_path: PathBuf,
}

impl FileBackend {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Filesystem path for a key, with path separators and colons replaced.
    fn file_path(&self, key: &str) -> PathBuf {
        let safe_key = key.replace(['/', '\\', ':'], "_");
        self.base_path.join(format!("{}.json", safe_key))
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.file_path(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await?;
        let path = self.file_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_overwrites_whole_entries() {
        let backend = MemoryBackend::new();
        assert!(backend.get_bytes("orders").await.unwrap().is_none());

        backend.set_bytes("orders", b"[1]".to_vec()).await.unwrap();
        backend.set_bytes("orders", b"[2]".to_vec()).await.unwrap();
        assert_eq!(backend.get_bytes("orders").await.unwrap(), Some(b"[2]".to_vec()));
        assert!(backend.get_bytes("users").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_backend_creates_directory_and_sanitizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("nested"));

        backend.set_bytes("sales:orders", b"[]".to_vec()).await.unwrap();
        assert!(dir.path().join("nested").join("sales_orders.json").exists());
        assert_eq!(
            backend.get_bytes("sales:orders").await.unwrap(),
            Some(b"[]".to_vec())
        );    }
}
