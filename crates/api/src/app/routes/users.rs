use axum::{
    Form, Json,
    extract::{
        Extension, Query,
        rejection::{FormRejection, JsonRejection},
    },
};

use todoserv_core::User;
use todoserv_store::Store;

use crate::app::dto::{CreateUserRequest, SearchParams, UserPayload};
use crate::app::errors::ApiError;

/// `POST /json` — bind a user-shaped JSON payload and echo it back.
pub async fn echo_json(
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<UserPayload>, ApiError> {
    let Json(user) = payload.map_err(|_| ApiError::validation("Invalid JSON data"))?;
    Ok(Json(user))
}

/// `POST /form` — bind a user-shaped form payload and echo it back.
pub async fn echo_form(
    payload: Result<Form<UserPayload>, FormRejection>,
) -> Result<Json<UserPayload>, ApiError> {
    let Form(user) = payload.map_err(|_| ApiError::validation("Invalid form data"))?;
    Ok(Json(user))
}

/// `GET /search?q=<fragment>` — substring search on user names.
pub async fn search_users(
    Extension(store): Extension<Store>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<User>>, ApiError> {
    if params.q.is_empty() {
        return Err(ApiError::validation("Search parameter 'q' is required!"));
    }

    // An empty match set is an ordinary outcome: 200 with an empty array.
    let users = store.users().search_by_name(&params.q).await?;
    Ok(Json(users))
}

/// `POST /users` — create a user from a JSON body.
pub async fn create_user(
    Extension(store): Extension<Store>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(body) = payload.map_err(|_| ApiError::validation("Invalid JSON data"))?;

    let user = store.users().create(&body.name, &body.email).await?;
    Ok(Json(user))
}

/// `GET /users` — every user, in insertion order.
pub async fn list_users(
    Extension(store): Extension<Store>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = store.users().list().await?;
    Ok(Json(users))
}
