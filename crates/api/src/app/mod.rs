//! HTTP application wiring (axum router + middleware composition).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request payload shapes
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;

use todoserv_store::Store;

use crate::middleware::{self, AuthState};

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// The store handle is injected as a request extension; the request logger
/// sits outermost so it also observes auth-gate aborts and unmatched routes.
pub fn build_app(store: Store, api_key: String) -> Router {
    let auth = AuthState {
        api_key: Arc::from(api_key),
    };

    routes::router(auth).layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::request_logger))
            .layer(axum::Extension(store)),
    )
}
