//! Response envelope shared by every endpoint.
//!
//! `code` is a coarse success/failure marker and does not follow the HTTP
//! status of the response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Success,
    Fail,
}

pub const CODE_SUCCESS: u16 = 200;
pub const CODE_FAIL: u16 = 500;

/// Successful response body
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub status: ResponseStatus,
    pub code: u16,
    pub data: Option<T>,
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub code: u16,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Fail,
            code: CODE_FAIL,
            error: error.into(),
        }
    }
}

/// Success envelope paired with the HTTP status to send it with
pub struct ApiResponse<T> {
    status: StatusCode,
    body: SuccessResponse<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self::with_status(StatusCode::OK, Some(data))
    }

    pub fn created(data: T) -> Self {
        Self::with_status(StatusCode::CREATED, Some(data))
    }

    fn with_status(status: StatusCode, data: Option<T>) -> Self {
        Self {
            status,
            body: SuccessResponse {
                status: ResponseStatus::Success,
                code: CODE_SUCCESS,
                data,
            },
        }
    }
}

impl ApiResponse<()> {
    /// 200 with `"data": null`
    pub fn empty() -> Self {
        Self::with_status(StatusCode::OK, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
