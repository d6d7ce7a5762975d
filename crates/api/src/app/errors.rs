use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use todoserv_store::StoreError;

/// Handler-boundary error: everything a route can fail with, resolved to an
/// HTTP status plus a `{"error": "..."}` body.
///
/// The auth gate writes its 401 directly from the middleware, so it needs no
/// variant here.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing input (400).
    Validation(String),
    /// Unknown or soft-deleted record (404).
    NotFound(&'static str),
    /// Underlying persistence failure (500). Detail goes to the log only.
    Store(StoreError),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, msg),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal storage error")
            }
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}
