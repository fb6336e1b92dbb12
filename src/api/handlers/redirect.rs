//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `308 Permanent Redirect`. Expiry is not checked.
///
/// # Errors
///
/// Returns 400 Bad Request if the code is unknown, 500 on storage failure.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let long_url = state.redirect_service.resolve(&code).await?;

    info!(%code, target = %long_url, "Redirecting");

    Ok(Redirect::permanent(&long_url))
}
