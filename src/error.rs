//! Error types for the messages service
//!
//! Provides unified error handling using thiserror. Every API failure renders
//! the same `{ "success": false, "message": ... }` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == API Error Enum ==
/// Unified error type for request handling.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body failed a validation policy
    #[error("{0}")]
    Validation(String),

    /// No bearer token on a protected request
    #[error("Access denied, no token provided")]
    Unauthenticated,

    /// No live server-side session
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// Token signature, expiry or encoding is bad
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Token verified but carries no usable subject
    #[error("Malformed token payload")]
    MalformedToken,

    /// Token subject does not resolve to a user
    #[error("User not found or removed")]
    UserNotFound,

    /// Session, token and user access-token disagree
    #[error("Session is no longer valid, please log in again")]
    SessionInvalid,

    /// Role gate rejected the caller
    #[error("You are not authorized to perform this action")]
    Forbidden,

    /// Login with unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Resource not found (or not owned by the caller)
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness constraint violated
    #[error("{0}")]
    Conflict(String),

    /// Internal server error
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated
            | ApiError::SessionExpired
            | ApiError::InvalidToken
            | ApiError::UserNotFound
            | ApiError::SessionInvalid
            | ApiError::Forbidden
            | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::MalformedToken => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::Internal(format!("Password hashing failed: {}", err))
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("Background task failed: {}", err))
    }
}

// == Cache Error Enum ==
/// Failures of the verdict cache. These never reach a client.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key rejected by the store
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),

    /// Value rejected by the store
    #[error("Invalid cache value: {0}")]
    InvalidValue(String),

    /// Backing store could not be reached
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

// == Result Type Alias ==
/// Convenience Result type for request handling.
pub type Result<T> = std::result::Result<T, ApiError>;
