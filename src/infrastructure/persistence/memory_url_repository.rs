//! In-process URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{StorageError, UrlRepository};

/// Repository keeping records in a map guarded by an async lock.
///
/// Nothing is persisted across restarts. Used by the HTTP integration tests
/// and anywhere a throwaway store is enough.
#[derive(Default)]
pub struct MemoryUrlRepository {
    records: RwLock<HashMap<String, UrlRecord>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, StorageError> {
        Ok(self.records.read().await.get(code).cloned())
    }

    async fn insert(&self, record: UrlRecord) -> Result<(), StorageError> {
        match self.records.write().await.entry(record.code.clone()) {
            Entry::Occupied(entry) => Err(StorageError::DuplicateCode(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}
