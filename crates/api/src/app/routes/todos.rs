use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
};
use chrono::Utc;
use serde_json::json;

use todoserv_core::{Todo, TodoId};
use todoserv_store::Store;

use crate::app::dto::{CreateTodoRequest, UpdateTodoRequest};
use crate::app::errors::ApiError;

const TODO_NOT_FOUND: &str = "Todo not found";

/// `POST /todos` — create a todo from a JSON body.
pub async fn create_todo(
    Extension(store): Extension<Store>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(body) = payload.map_err(|_| ApiError::validation("Invalid JSON data"))?;

    let todo = store
        .todos()
        .create(&body.title, &body.description, Utc::now())
        .await?;
    Ok(Json(todo))
}

/// `GET /todos` — every live todo, in insertion order.
pub async fn list_todos(Extension(store): Extension<Store>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(store.todos().list().await?))
}

/// `GET /todos/:id`
pub async fn get_todo(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = find_live_todo(&store, &id).await?;
    Ok(Json(todo))
}

/// `PUT /todos/:id` — mutate title and description in place.
///
/// Resolution order matches the update contract: an unknown id is a 404
/// before the body shape is even considered, and a bad body mutates nothing.
pub async fn update_todo(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let mut todo = find_live_todo(&store, &id).await?;

    let Json(body) = payload.map_err(|_| ApiError::validation("Invalid JSON data"))?;

    todo.apply_update(body.title, body.description, Utc::now());
    store.todos().save(&todo).await?;

    Ok(Json(todo))
}

/// `DELETE /todos/:id` — soft delete; the row stays behind the marker.
pub async fn delete_todo(
    Extension(store): Extension<Store>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let todo = find_live_todo(&store, &id).await?;

    store.todos().soft_delete(&todo, Utc::now()).await?;

    Ok(Json(
        json!({ "message": format!("Todo with ID {} deleted", todo.id) }),
    ))
}

/// Resolve a path segment to a live todo.
///
/// A segment that does not parse as an id takes the same path as a missing
/// row — the caller cannot tell them apart, both answer "Todo not found".
async fn find_live_todo(store: &Store, raw_id: &str) -> Result<Todo, ApiError> {
    let id: TodoId = raw_id
        .parse()
        .map_err(|_| ApiError::NotFound(TODO_NOT_FOUND))?;

    store
        .todos()
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(TODO_NOT_FOUND))
}
