//! HTTP-facing error type.
//!
//! Service errors are converted into [`AppError`] at the handler boundary.
//! Client-caused conditions become `400`, everything else `500` with a fixed
//! message. The response body is always `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::application::services::{RedirectError, ShortenError};

/// Message returned for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Builds an internal error, logging `cause` once.
    ///
    /// The cause is not exposed to the client.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        tracing::error!("Internal error: {}", cause);
        Self::Internal {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message } | AppError::Internal { message } => message,
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ShortenError> for AppError {
    fn from(e: ShortenError) -> Self {
        match e {
            ShortenError::InvalidUrl(_) | ShortenError::CodeInUse(_) => {
                AppError::bad_request(e.to_string())
            }
            ShortenError::Generation(e) => AppError::internal(e),
            ShortenError::Storage(e) => AppError::internal(e),
        }
    }
}

impl From<RedirectError> for AppError {
    fn from(e: RedirectError) -> Self {
        match e {
            RedirectError::NoSuchCode(_) => AppError::bad_request(e.to_string()),
            RedirectError::Storage(e) => AppError::internal(e),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(errors.to_string())
    }
}
