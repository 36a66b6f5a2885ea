use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::AppError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

/// Maps the domain taxonomy onto HTTP statuses. Business and state errors
/// keep their message verbatim; storage and cache failures are logged and
/// collapsed into a generic 500.
impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        use AppError::*;

        match &err {
            UserNotFound | TeamNotFound | PlayerNotFound | TransferNotFound => {
                Self::not_found(err.to_string())
            }
            UserAlreadyExists | PlayerAlreadyListed => {
                Self::new(StatusCode::CONFLICT, err.to_string())
            }
            Forbidden => Self::new(StatusCode::FORBIDDEN, err.to_string()),
            Unauthorized | InvalidCredentials => Self::unauthorized(err.to_string()),
            TooManyAttempts => Self::new(StatusCode::TOO_MANY_REQUESTS, err.to_string()),
            InsufficientFunds | CannotBuyOwnPlayer | TransferNotActive => {
                Self::bad_request(err.to_string())
            }
            Storage { .. } | Cache { .. } | SnapshotEncoding { .. } | Internal(_) => {
                tracing::error!(error = %err, "internal error");
                Self::internal_server_error("internal server error")
            }
        }
    }
}
