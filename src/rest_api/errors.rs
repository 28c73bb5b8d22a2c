//! # REST API Errors
//!
//! Error taxonomy for the trivia API and its single mapping to HTTP.
//! Every error renders the same envelope:
//! `{"success": false, "error": <status>, "message": <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    /// Malformed, missing or out-of-range input
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No matching resource, or an empty result page
    #[error("resource not found")]
    NotFound,

    /// Store rejected a write after validation passed
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    /// Route exists but not for this verb
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Store failed while reading
    #[error("internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal detail never leaves the server.
    pub fn public_message(&self) -> &'static str {
        match self {
            RestError::BadRequest(_) => "bad request",
            RestError::NotFound => "resource not found",
            RestError::Unprocessable(_) => "unprocessable",
            RestError::MethodNotAllowed => "method not allowed",
            RestError::Internal(_) => "internal server error",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            success: false,
            error: err.status_code().as_u16(),
            message: err.public_message(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        match &self {
            RestError::Internal(_) | RestError::Unprocessable(_) => {
                tracing::error!(error = %self, "request failed");
            }
            _ => tracing::debug!(error = %self, "request rejected"),
        }
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::BadRequest("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RestError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RestError::Unprocessable("x".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            RestError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            RestError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_envelope() {
        let body = serde_json::to_value(ErrorResponse::from(&RestError::NotFound)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": 404, "message": "resource not found"})
        );
    }

    #[test]
    fn test_unprocessable_envelope_uses_422() {
        let err = RestError::Unprocessable("constraint".to_string());
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(body["error"], 422);
        assert_eq!(body["message"], "unprocessable");
    }

    #[test]
    fn test_detail_not_exposed() {
        let err = RestError::Internal("disk on fire".to_string());
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(body["message"], "internal server error");
    }
}
