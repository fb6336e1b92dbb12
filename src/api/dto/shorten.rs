//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ShortenedUrl;

/// Format of the `expires` field in responses.
pub const EXPIRES_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Must be an absolute URL.
    #[serde(default)]
    #[validate(length(min = 1, message = "long_url is required"))]
    pub long_url: String,
}

/// Response for a newly created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "newUrl")]
    pub new_url: String,

    /// Expiry timestamp in UTC, formatted as `YYYY-MM-DD HH:MM:SS`.
    pub expires: String,

    pub db_id: String,
}

impl From<ShortenedUrl> for ShortenResponse {
    fn from(shortened: ShortenedUrl) -> Self {
        Self {
            new_url: shortened.short_url,
            expires: shortened.expires_at.format(EXPIRES_FORMAT).to_string(),
            db_id: shortened.id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn test_response_serialization() {
        let id = Uuid::new_v4();
        let response = ShortenResponse::from(ShortenedUrl {
            id,
            code: "abcd1234".to_string(),
            short_url: "http://localhost:5000/abcd1234".to_string(),
            expires_at: Utc.with_ymd_and_hms(2025, 3, 9, 7, 5, 3).unwrap(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["newUrl"], "http://localhost:5000/abcd1234");
        assert_eq!(json["expires"], "2025-03-09 07:05:03");
        assert_eq!(json["db_id"], id.to_string());
    }

    #[test]
    fn test_request_missing_field_fails_validation() {
        let request: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_with_url_passes_validation() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"long_url": "https://example.com"}"#).unwrap();
        assert!(request.validate().is_ok());
    }
}
