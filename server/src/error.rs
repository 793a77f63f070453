//! Unified error handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::store::StoreError;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] roster_engine::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    messages: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details, messages) = match self {
            AppError::Engine(e) => {
                tracing::warn!("Engine error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    "Engine error".to_string(),
                    Some(e.to_string()),
                    Vec::new(),
                )
            }
            AppError::Store(e) => {
                let status = match e {
                    StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                    StoreError::TenantMismatch { .. } | StoreError::MissingId => {
                        StatusCode::BAD_REQUEST
                    }
                };
                (status, e.to_string(), None, Vec::new())
            }
            AppError::Validation(messages) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation failed".to_string(),
                None,
                messages,
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None, Vec::new()),
        };

        let body = Json(ErrorResponse {
            error: error_message,
            details,
            messages,
        });

        (status, body).into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
