//! Error types for the HTTP server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use pinpoint_core::{InputError, PdfError};

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Unreadable document: {0}")]
    Document(#[from] PdfError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Input(_) | ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Document(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        warn!("Request rejected: {}", self);

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
