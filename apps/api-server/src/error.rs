//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meal_store::MealStoreError;
use serde_json::json;

/// Error codes returned in JSON error bodies.
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Resource not found. Covers both genuine absence and ownership
    /// mismatch; the two are indistinguishable to the caller.
    #[error("Not found")]
    NotFound,

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] MealStoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_REQUEST, msg.clone())
            }
            // 404s carry an empty body.
            ServerError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            // A broken foreign key means the caller referenced a user that
            // does not exist, which is a request problem, not a server one.
            ServerError::Store(MealStoreError::ForeignKeyViolation(msg)) => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_REQUEST, msg.clone())
            }
            ServerError::Store(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
            ),
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
