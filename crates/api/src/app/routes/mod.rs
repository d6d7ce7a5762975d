use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::{self, AuthState};

pub mod products;
pub mod system;
pub mod todos;
pub mod users;

/// Assemble every route and route group.
///
/// The `/private` group carries the auth gate as its own layer; `/public`
/// carries none. Anything outside a group is reachable without credentials.
pub fn router(auth: AuthState) -> Router {
    let public = Router::new().route("/info", get(system::public_info));

    let private = Router::new()
        .route("/data", get(system::private_data))
        .route("/create", post(system::private_create))
        .layer(axum::middleware::from_fn_with_state(
            auth,
            middleware::require_api_key,
        ));

    Router::new()
        .route("/", get(system::greeting))
        .route("/json", post(users::echo_json))
        .route("/form", post(users::echo_form))
        .route("/search", get(users::search_users))
        .route("/users", post(users::create_user).get(users::list_users))
        .route("/todos", post(todos::create_todo).get(todos::list_todos))
        .route(
            "/todos/:id",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/product/:id", get(products::product_profile))
        .nest("/public", public)
        .nest("/private", private)
}
