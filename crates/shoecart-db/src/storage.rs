//! # Local Storage Seam
//!
//! The `LocalStorage` trait mirrors the browser Web Storage API the cart
//! used to persist into: string keys, string values, last write wins.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartStore ──► Arc<dyn LocalStorage>                                   │
//! │                     │                                                   │
//! │                     ├── LocalStorageRepository  (SQLite, production)   │
//! │                     └── MemoryStorage           (tests, --ephemeral)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::error::DbResult;

/// Persistent string key-value store.
#[async_trait]
pub trait LocalStorage: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get_item(&self, key: &str) -> DbResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> DbResult<()>;

    /// Deletes `key`. Returns whether a value was present.
    async fn remove_item(&self, key: &str) -> DbResult<bool>;

    /// All keys, sorted.
    async fn keys(&self) -> DbResult<Vec<String>>;

    /// Deletes every key.
    async fn clear(&self) -> DbResult<()>;
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> DbResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> DbResult<bool> {
        Ok(self.entries.write().await.remove(key).is_some())
    }

    async fn keys(&self) -> DbResult<Vec<String>> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }

    async fn clear(&self) -> DbResult<()> {
        self.entries.write().await.clear();
        Ok(())
    }
}
