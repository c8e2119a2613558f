//! # Collection Snapshots
//!
//! A [`Snapshot`] stores a whole collection as one JSON array under a single key.
//! It is read once when an actor starts and overwritten wholesale after every
//! change; there is no incremental format and no schema version.

use crate::storage::{StorageBackend, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

/// Typed view of one storage entry holding a JSON array of `T`.
pub struct Snapshot<T> {
    backend: Arc<dyn StorageBackend>,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> Snapshot<T> {
    pub fn new(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored collection. An entry that was never written loads as empty.
    pub async fn load(&self) -> Result<Vec<T>, StorageError> {
        match self.backend.get_bytes(&self.key).await? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StorageError::Serialization(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    /// Replaces the stored collection with `items`.
    pub async fn save(&self, items: &[T]) -> Result<(), StorageError> {
        let bytes =
            serde_json::to_vec(items).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.backend.set_bytes(&self.key, bytes).await
    }
}
