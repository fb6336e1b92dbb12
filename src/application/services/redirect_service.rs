//! Short code resolution service.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::repositories::{StorageError, UrlRepository};

/// Errors returned by [`RedirectService::resolve`].
#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("No URL with code: {0}")]
    NoSuchCode(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Service resolving short codes to their original URLs.
///
/// Expiry is not checked: a record past its `expires_at` still resolves.
pub struct RedirectService {
    repository: Arc<dyn UrlRepository>,
}

impl RedirectService {
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Returns the long URL stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`RedirectError::NoSuchCode`] if no record matches,
    /// [`RedirectError::Storage`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, RedirectError> {
        self.repository
            .find_by_code(code)
            .await?
            .map(|record| record.long_url)
            .ok_or_else(|| RedirectError::NoSuchCode(code.to_string()))
    }
}
