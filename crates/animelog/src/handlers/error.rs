//! JSON error responses for the HTTP API.
//!
//! Every failure a handler can report is a variant of [`ApiError`]. Each
//! variant has a fixed status code and message; storage error details are
//! logged, never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request body could not be decoded; carries the decoder's message.
    #[error("{0}")]
    InvalidBody(String),
    /// The path or body could not be extracted; carries axum's message.
    #[error("{0}")]
    InvalidRequest(String),
    #[error("failed to save anime")]
    InsertFailed,
    #[error("id must be an uuid or id does not exist in DB")]
    LookupFailed,
    #[error("id is invalid")]
    NotFound,
    #[error("failed to delete anime")]
    DeleteFailed,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("route not found")]
    RouteNotFound,
}

impl ApiError {
    /// Maps each error kind to its HTTP status code.
    ///
    /// Body decode failures answer 500 and lookup failures 400, matching the
    /// contract existing clients rely on.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InsertFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::LookupFailed => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::BAD_REQUEST,
            ApiError::DeleteFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        tracing::warn!(status = %status, message = %message, "API error");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Fallback for unsupported methods on a known route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Fallback for unknown routes.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
