/// Error types for Post Service
///
/// Every error that reaches the HTTP boundary is rendered as the standard
/// `{code, message, path}` envelope instead of actix's plain-text defaults.
use crate::response;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for post-service handlers
pub type Result<T> = std::result::Result<T, ApiError>;

/// Generic message used when the failure detail is not exposed to callers
pub const BAD_REQUEST: &str = "Bad Request";

/// Errors returned to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be served; `message` is sent verbatim
    #[error("{message}")]
    BadRequest { message: String, path: String },

    /// No route matches the request path
    #[error("Not Found")]
    NotFound { path: String },

    /// Route exists but not for this method
    #[error("Method Not Allowed")]
    MethodNotAllowed { path: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Path reported in the envelope
    pub fn path(&self) -> &str {
        match self {
            ApiError::BadRequest { path, .. }
            | ApiError::NotFound { path }
            | ApiError::MethodNotAllowed { path } => path,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        response::envelope(self.status_code(), &self.to_string(), self.path())
    }
}
