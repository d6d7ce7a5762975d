//! Todo record gateway (soft-deleting).

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use todoserv_core::{Timestamps, Todo, TodoId};

use crate::error::StoreResult;

/// Create the todo table shape. Idempotent: repeat calls are no-ops.
///
/// Timestamps are stored as RFC3339 TEXT; `deleted_at` is the soft-delete
/// marker.
pub(crate) async fn provision(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            deleted_at  TEXT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Typed operations over todo records.
pub struct Todos<'a> {
    pool: &'a SqlitePool,
}

impl<'a> Todos<'a> {
    pub(crate) fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new todo; the store assigns the identifier.
    pub async fn create(
        &self,
        title: &str,
        description: &str,
        now: DateTime<Utc>,
    ) -> StoreResult<Todo> {
        let stamps = Timestamps::new(now);

        let result = sqlx::query(
            r#"
            INSERT INTO todos (title, description, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(stamps.created_at.to_rfc3339())
        .bind(stamps.updated_at.to_rfc3339())
        .execute(self.pool)
        .await?;

        Ok(Todo {
            id: TodoId::from_raw(result.last_insert_rowid()),
            title: title.to_owned(),
            description: description.to_owned(),
            stamps,
        })
    }

    /// All live (not soft-deleted) todos, in insertion order.
    pub async fn list(&self) -> StoreResult<Vec<Todo>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, created_at, updated_at, deleted_at
            FROM todos
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(row_to_todo).collect()
    }

    /// A single live todo, or `None` when the id is unknown or the record is
    /// soft-deleted.
    pub async fn find_by_id(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, created_at, updated_at, deleted_at
            FROM todos
            WHERE id = ?1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map(row_to_todo).transpose()
    }

    /// Persist the mutable fields of an existing todo.
    ///
    /// Touches title, description and `updated_at` only. The statement is a
    /// pure UPDATE keyed by id, so an unknown id can never materialize a row.
    pub async fn save(&self, todo: &Todo) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE todos
            SET title = ?1, description = ?2, updated_at = ?3
            WHERE id = ?4 AND deleted_at IS NULL
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.stamps.updated_at.to_rfc3339())
        .bind(todo.id.as_i64())
        .execute(self.pool)
        .await?;
        Ok(())
    }

    /// Place the soft-delete marker without removing the row.
    pub async fn soft_delete(&self, todo: &Todo, now: DateTime<Utc>) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE todos
            SET deleted_at = ?1
            WHERE id = ?2 AND deleted_at IS NULL
            "#,
        )
        .bind(now.to_rfc3339())
        .bind(todo.id.as_i64())
        .execute(self.pool)
        .await?;
        Ok(())
    }
}

fn row_to_todo(row: SqliteRow) -> StoreResult<Todo> {
    let created_at = parse_utc(row.try_get("created_at")?)?;
    let updated_at = parse_utc(row.try_get("updated_at")?)?;
    let deleted_at = row
        .try_get::<Option<String>, _>("deleted_at")?
        .map(parse_utc)
        .transpose()?;

    Ok(Todo {
        id: TodoId::from_raw(row.try_get("id")?),
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        stamps: Timestamps {
            created_at,
            updated_at,
            deleted_at,
        },
    })
}

fn parse_utc(raw: String) -> StoreResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(&raw)?.with_timezone(&Utc))
}
