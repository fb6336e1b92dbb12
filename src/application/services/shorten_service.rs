//! Short link creation service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{StorageError, UrlRepository};
use crate::utils::code_generator::{CodeGenerator, GenerationError};

/// Errors returned by [`ShortenService::shorten`].
#[derive(Debug, Error)]
pub enum ShortenError {
    /// The input is not a syntactically valid absolute URL.
    #[error("{0}")]
    InvalidUrl(String),

    /// The generated code is already taken. No regeneration is attempted.
    #[error("Code in use: {0}")]
    CodeInUse(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Storage(StorageError),
}

/// Result of a successful shortening.
#[derive(Debug, Clone)]
pub struct ShortenedUrl {
    pub id: Uuid,
    pub code: String,
    pub short_url: String,
    pub expires_at: DateTime<Utc>,
}

impl From<UrlRecord> for ShortenedUrl {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            code: record.code,
            short_url: record.short_url,
            expires_at: record.expires_at,
        }
    }
}

/// Service for creating short links.
///
/// Uniqueness is checked with a lookup before insert. The storage layer
/// rejects duplicates as well, so two concurrent requests that draw the same
/// code end with one of them receiving [`ShortenError::CodeInUse`].
pub struct ShortenService {
    repository: Arc<dyn UrlRepository>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
}

impl ShortenService {
    /// Creates a new shortening service.
    ///
    /// `base_url` is prefixed verbatim to every generated code.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            generator,
            base_url: base_url.into(),
        }
    }

    /// Shortens `long_url` and stores the new record.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidUrl`] if `long_url` is not an absolute
    ///   hierarchical URL such as `https://host/path` (nothing is read from or
    ///   written to storage in that case)
    /// - [`ShortenError::CodeInUse`] if the generated code already exists
    /// - [`ShortenError::Generation`] / [`ShortenError::Storage`] on internal failures
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenedUrl, ShortenError> {
        let parsed =
            url::Url::parse(long_url).map_err(|e| ShortenError::InvalidUrl(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(ShortenError::InvalidUrl(format!(
                "not a hierarchical URL: {long_url}"
            )));
        }

        let code = self.generator.generate()?;

        if self
            .repository
            .find_by_code(&code)
            .await
            .map_err(ShortenError::Storage)?
            .is_some()
        {
            return Err(ShortenError::CodeInUse(code));
        }

        // Serialized form is always a valid `Location` header value.
        let record = UrlRecord::new(code, parsed.into(), &self.base_url, Utc::now());
        let shortened = ShortenedUrl::from(record.clone());

        self.repository
            .insert(record)
            .await
            .map_err(|e| match e {
                StorageError::DuplicateCode(code) => ShortenError::CodeInUse(code),
                other => ShortenError::Storage(other),
            })?;

        tracing::debug!(code = %shortened.code, "Short URL created");

        Ok(shortened)
    }
}
