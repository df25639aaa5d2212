//! # Local Storage
//!
//! A string key-value store with the browser `localStorage` surface
//! (`getItem`, `setItem`, `removeItem`, `clear`, keys), backed by one
//! SQLite table.
//!
//! ## Table
//! ```text
//! local_storage
//! ┌────────────────────┬──────────────────────────────┬─────────────────────┐
//! │ key (PK)           │ value                        │ updated_at          │
//! ├────────────────────┼──────────────────────────────┼─────────────────────┤
//! │ anchor_orders      │ [{"id":"…",…},…]             │ 2024-06-10T09:00:…  │
//! │ anchor_settings    │ {"businessName":"…",…}       │ 2024-06-09T17:12:…  │
//! └────────────────────┴──────────────────────────────┴─────────────────────┘
//! ```
//!
//! Values are opaque strings here. The JSON meaning lives in
//! [`crate::repository`].

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Handle to the key-value table. Cheap to clone (shares the pool).
#[derive(Debug, Clone)]
pub struct LocalStorage {
    pool: SqlitePool,
}

impl LocalStorage {
    pub fn new(pool: SqlitePool) -> Self {
        LocalStorage { pool }
    }

    /// Returns the value stored under `key`, if any.
    pub async fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM local_storage WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub async fn set_item(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing storage key");

        sqlx::query(
            r#"
            INSERT INTO local_storage (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes `key`. A missing key is not an error.
    pub async fn remove_item(&self, key: &str) -> DbResult<()> {
        debug!(key = %key, "Removing storage key");

        sqlx::query("DELETE FROM local_storage WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// All keys, sorted.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT key FROM local_storage ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }

    /// Whether `key` holds a value.
    pub async fn contains_key(&self, key: &str) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM local_storage WHERE key = ?1")
            .bind(key)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Removes every key.
    pub async fn clear(&self) -> DbResult<()> {
        debug!("Clearing local storage");

        sqlx::query("DELETE FROM local_storage")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    async fn storage() -> super::LocalStorage {
        Database::new(DbConfig::in_memory())
            .await
            .unwrap()
            .storage()
    }

    #[tokio::test]
    async fn test_set_get_overwrite() {
        let storage = storage().await;

        assert_eq!(storage.get_item("k").await.unwrap(), None);

        storage.set_item("k", "one").await.unwrap();
        storage.set_item("k", "two").await.unwrap();

        assert_eq!(storage.get_item("k").await.unwrap().as_deref(), Some("two"));
        assert!(storage.contains_key("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let storage = storage().await;
        storage.remove_item("never-set").await.unwrap();

        storage.set_item("a", "1").await.unwrap();
        storage.remove_item("a").await.unwrap();
        assert!(!storage.contains_key("a").await.unwrap());
    }

    #[tokio::test]
    async fn test_keys_sorted_and_clear() {
        let storage = storage().await;
        storage.set_item("b", "2").await.unwrap();
        storage.set_item("a", "1").await.unwrap();

        assert_eq!(storage.keys().await.unwrap(), vec!["a", "b"]);

        storage.clear().await.unwrap();
        assert!(storage.keys().await.unwrap().is_empty());
    }
}
