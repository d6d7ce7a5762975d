//! User record gateway.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use todoserv_core::{User, UserId};

use crate::error::StoreResult;

/// Create the user table shape. Idempotent: repeat calls are no-ops.
pub(crate) async fn provision(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL,
            email TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Typed operations over user records.
pub struct Users<'a> {
    pool: &'a SqlitePool,
}

impl<'a> Users<'a> {
    pub(crate) fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new user; the store assigns the identifier.
    pub async fn create(&self, name: &str, email: &str) -> StoreResult<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email)
            VALUES (?1, ?2)
            "#,
        )
        .bind(name)
        .bind(email)
        .execute(self.pool)
        .await?;

        Ok(User {
            id: UserId::from_raw(result.last_insert_rowid()),
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }

    /// All users, in insertion order.
    pub async fn list(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(row_to_user).collect()
    }

    /// Users whose name contains `fragment`.
    ///
    /// Plain SQL `LIKE`; SQLite matches ASCII case-insensitively.
    pub async fn search_by_name(&self, fragment: &str) -> StoreResult<Vec<User>> {
        let pattern = format!("%{fragment}%");

        let rows = sqlx::query(
            r#"
            SELECT id, name, email
            FROM users
            WHERE name LIKE ?1
            ORDER BY id
            "#,
        )
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(row_to_user).collect()
    }
}

fn row_to_user(row: SqliteRow) -> StoreResult<User> {
    Ok(User {
        id: UserId::from_raw(row.try_get("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
    })
}

#[cfg(test)]
mod tests {
    use crate::Store;

    #[tokio::test]
    async fn create_assigns_fresh_ids_in_order() {
        let store = Store::in_memory().await.unwrap();

        let ada = store.users().create("Ada", "ada@example.com").await.unwrap();
        let brian = store
            .users()
            .create("Brian", "brian@example.com")
            .await
            .unwrap();

        assert_ne!(ada.id, brian.id);
        assert!(ada.id < brian.id);

        let all = store.users().list().await.unwrap();
        assert_eq!(all, vec![ada, brian]);
    }

    #[tokio::test]
    async fn search_matches_name_substring() {
        let store = Store::in_memory().await.unwrap();
        store
            .users()
            .create("Ada Lovelace", "ada@example.com")
            .await
            .unwrap();
        store
            .users()
            .create("Alan Turing", "alan@example.com")
            .await
            .unwrap();

        let hits = store.users().search_by_name("love").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ada Lovelace");

        let none = store.users().search_by_name("hopper").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn provision_is_idempotent() {
        let store = Store::in_memory().await.unwrap();
        store.users().create("Ada", "ada@example.com").await.unwrap();

        // Re-provisioning must not disturb existing rows.
        super::provision(&store.pool).await.unwrap();

        let all = store.users().list().await.unwrap();
        assert_eq!(all.len(), 1);
    }
}
