//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Number of days a freshly created record stays valid.
pub const RECORD_TTL_DAYS: i64 = 5;

/// A stored mapping from a short code to its original URL.
///
/// Records are created once and never updated. `expires_at` is informational:
/// nothing in the service consults it when resolving a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: Uuid,
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Builds a new record created at `created_at`.
    ///
    /// Assigns a fresh identifier, derives `short_url` by appending `code` to
    /// `base_url`, and sets the expiry [`RECORD_TTL_DAYS`] days later.
    pub fn new(
        code: String,
        long_url: String,
        base_url: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        let short_url = format!("{base_url}{code}");

        Self {
            id: Uuid::new_v4(),
            code,
            long_url,
            short_url,
            created_at,
            expires_at: created_at + Duration::days(RECORD_TTL_DAYS),
        }
    }
}
