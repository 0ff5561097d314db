//! Error types for the books server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::response::ErrorResponse;

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("resource: {resource} with {field}: {value} not found")]
    NotFound {
        resource: String,
        field: String,
        value: String,
    },

    #[error("resource: {resource} with {field} already exists")]
    Conflict { resource: String, field: String },

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("service unavailable or timed out")]
    ServiceUnavailable,

    #[error("internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(resource: &str, field: &str, value: &str) -> Self {
        AppError::NotFound {
            resource: resource.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn conflict(resource: &str, field: &str) -> Self {
        AppError::Conflict {
            resource: resource.to_string(),
            field: field.to_string(),
        }
    }

    /// HTTP status the transport layer reports for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        (self.status(), Json(ErrorResponse::new(message))).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
