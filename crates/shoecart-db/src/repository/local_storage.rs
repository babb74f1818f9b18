//! # Local Storage Repository
//!
//! SQLite implementation of [`LocalStorage`].
//!
//! ## Table
//! ```text
//! local_storage
//! ├── key         TEXT PRIMARY KEY
//! ├── value       TEXT NOT NULL      ← the cart JSON lives here
//! └── updated_at  TEXT NOT NULL      ← RFC 3339, set on every write
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::storage::LocalStorage;

/// A stored value with its write time.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StorageEntry {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Repository for the `local_storage` table.
///
/// ## Usage
/// ```rust,ignore
/// let repo = LocalStorageRepository::new(pool);
/// repo.set_item("@RocketShoes:cart", "[]").await?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalStorageRepository {
    pool: SqlitePool,
}

impl LocalStorageRepository {
    /// Creates a new LocalStorageRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LocalStorageRepository { pool }
    }

    /// Returns the full row for `key`, including when it was last written.
    pub async fn get_entry(&self, key: &str) -> DbResult<Option<StorageEntry>> {
        let entry = sqlx::query_as::<_, StorageEntry>(
            "SELECT key, value, updated_at FROM local_storage WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }
}

#[async_trait]
impl LocalStorage for LocalStorageRepository {
    async fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        debug!(key = %key, "Reading local storage");

        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM local_storage WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    async fn set_item(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing local storage");

        sqlx::query(
            r#"
            INSERT INTO local_storage (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> DbResult<bool> {
        debug!(key = %key, "Removing local storage key");

        let result = sqlx::query("DELETE FROM local_storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn keys(&self) -> DbResult<Vec<String>> {
        let keys = sqlx::query_scalar("SELECT key FROM local_storage ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }

    async fn clear(&self) -> DbResult<()> {
        debug!("Clearing local storage");

        sqlx::query("DELETE FROM local_storage")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
