//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Liveness message (202)
//! - `GET  /health`   - Database health check
//! - `POST /shorten`  - Create a short URL
//! - `GET  /{code}`   - Short link redirect (308)
//!
//! Static routes take precedence over `/{code}`.

use crate::api::handlers::{health_handler, index_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes with state and tracing applied.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Full application: [`api_router`] behind trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
