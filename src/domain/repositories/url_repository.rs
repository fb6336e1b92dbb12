//! Repository trait for URL record storage.

use crate::domain::entities::UrlRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a [`UrlRepository`] implementation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store already holds a record with this code.
    #[error("code already stored: {0}")]
    DuplicateCode(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage gateway for URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds the record stored under `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if no record uses this code
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] on connectivity or query failures.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, StorageError>;

    /// Appends a new record. Never overwrites an existing one.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DuplicateCode`] if the code is already stored,
    /// [`StorageError::Database`] on any other failure.
    async fn insert(&self, record: UrlRecord) -> Result<(), StorageError>;

    /// Returns true when the store answers requests.
    async fn health_check(&self) -> bool;
}
