//! `todoserv-store` — SQLite-backed persistence gateway.
//!
//! Handlers reach the database exclusively through [`Store`]: an explicit
//! handle wrapping a connection pool, injected where it is needed rather
//! than held in a process-wide global.

pub mod error;
pub mod todos;
pub mod users;

pub use error::{StoreError, StoreResult};

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Shared handle to the backing SQLite database.
///
/// Cloning is cheap (the pool is shared). Conflicting concurrent writes are
/// serialized by SQLite itself; the gateway layers no coordination on top.
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) pool: SqlitePool,
}

impl Store {
    /// Open the database at `url`, creating the file if missing, and
    /// provision every record type's schema.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::provisioned(pool).await
    }

    /// Open a private in-memory database (used by tests).
    ///
    /// Capped at a single connection: every SQLite `:memory:` connection is
    /// its own database, so a wider pool would scatter the tables.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Self::provisioned(pool).await
    }

    async fn provisioned(pool: SqlitePool) -> StoreResult<Self> {
        users::provision(&pool).await?;
        todos::provision(&pool).await?;
        Ok(Self { pool })
    }

    /// Gateway for user records.
    pub fn users(&self) -> users::Users<'_> {
        users::Users::new(&self.pool)
    }

    /// Gateway for todo records.
    pub fn todos(&self) -> todos::Todos<'_> {
        todos::Todos::new(&self.pool)
    }
}
