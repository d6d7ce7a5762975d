//! Todo record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::TodoId;
use crate::timestamps::Timestamps;

/// A stored todo.
///
/// `id` and `stamps.created_at` are immutable after creation; `title`,
/// `description` and the update/deletion stamps are the only mutable state.
/// The stamps flatten into the JSON object, so the wire shape stays flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub stamps: Timestamps,
}

impl Todo {
    /// Replace the mutable fields in place.
    pub fn apply_update(&mut self, title: String, description: String, now: DateTime<Utc>) {
        self.title = title;
        self.description = description;
        self.stamps.touch(now);
    }

    pub fn is_deleted(&self) -> bool {
        self.stamps.is_deleted()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn sample(now: chrono::DateTime<Utc>) -> Todo {
        Todo {
            id: TodoId::from_raw(7),
            title: "write docs".into(),
            description: "for the gateway".into(),
            stamps: Timestamps::new(now),
        }
    }

    #[test]
    fn update_touches_only_mutable_fields() {
        let now = Utc::now();
        let mut todo = sample(now);

        let later = now + Duration::seconds(5);
        todo.apply_update("write more docs".into(), "and tests".into(), later);

        assert_eq!(todo.id.as_i64(), 7);
        assert_eq!(todo.stamps.created_at, now);
        assert_eq!(todo.stamps.updated_at, later);
        assert_eq!(todo.title, "write more docs");
        assert_eq!(todo.description, "and tests");
        assert!(!todo.is_deleted());
    }

    #[test]
    fn serializes_with_flattened_stamps() {
        let todo = sample(Utc::now());
        let value = serde_json::to_value(&todo).unwrap();

        assert!(value.get("created_at").is_some());
        assert!(value.get("updated_at").is_some());
        assert!(value.get("stamps").is_none());
        assert_eq!(value["id"], 7);
    }
}
