use serde::{Deserialize, Serialize};

// -------------------------
// Request DTOs
// -------------------------

/// User-shaped payload for the echo endpoints (`/json`, `/form`).
///
/// Missing fields bind to zero values and are echoed back as such; nothing
/// is persisted.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Body for `POST /users`. Identifiers are store-assigned, so there is no
/// id field; an id key in the body is simply ignored.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Body for `POST /todos`.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Body for `PUT /todos/:id`. Only the mutable fields appear.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Query for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
