//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "newUrl": "http://localhost:5000/Xk3_a9Qz",
///   "expires": "2025-03-09 07:05:03",
///   "db_id": "6f1c0f9e-3c3e-4b1e-9a57-2f0a3f4b5c6d"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, the URL is invalid, or
/// the generated code is already in use. Returns 500 on storage or code
/// generation failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let shortened = state.shorten_service.shorten(&payload.long_url).await?;

    Ok((StatusCode::CREATED, Json(ShortenResponse::from(shortened))))
}
