use async_trait::async_trait;
use axum::body::Bytes;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use super::interface::{tts_url, AudioStore, StorageError};
use super::naming::{generate_name, MAX_NAME_ATTEMPTS};

/// In-process store, used by tests and diskless demos.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: Arc<DashMap<String, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[async_trait]
impl AudioStore for MemoryStore {
    async fn put(&self, bytes: Bytes) -> Result<String, StorageError> {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let name = generate_name();
            if let Entry::Vacant(slot) = self.files.entry(name.clone()) {
                slot.insert(bytes);
                return Ok(tts_url(&name));
            }
        }
        Err(StorageError::NamesExhausted(MAX_NAME_ATTEMPTS))
    }

    async fn get(&self, name: &str) -> Result<Option<Bytes>, StorageError> {
        Ok(self.files.get(name).map(|e| e.value().clone()))
    }
}
