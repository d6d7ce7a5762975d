//! User record shape.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A stored user.
///
/// The identifier is assigned by the store and immutable afterwards. No
/// uniqueness is enforced on `email` at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}
