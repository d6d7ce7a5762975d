use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, middleware::Next, response::Response};

use crate::app::errors;

/// Header carrying the shared secret for the private route group.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct AuthState {
    pub api_key: Arc<str>,
}

/// Auth gate for the private route group.
///
/// Aborts with a 401 JSON body when the header is absent or wrong; the
/// downstream stages never run on that path.
pub async fn require_api_key(
    State(state): State<AuthState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match presented {
        Some(key) if key == state.api_key.as_ref() => next.run(req).await,
        _ => errors::json_error(StatusCode::UNAUTHORIZED, "Unauthorized"),
    }
}

/// Request logger wrapping every route.
///
/// Runs the rest of the chain, then emits one line with the method, final
/// status and elapsed time — aborted and unmatched requests included.
pub async fn request_logger(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed = ?start.elapsed(),
        "request"
    );

    response
}
