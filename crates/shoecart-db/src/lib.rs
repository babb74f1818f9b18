//! # shoecart-db: Local Storage Layer for Shoecart
//!
//! A persistent string key-value store on SQLite, standing in for the
//! browser's `localStorage`. The cart store writes one key (the cart JSON)
//! after every successful mutation and reads it once at startup.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shoecart Data Flow                               │
//! │                                                                         │
//! │  CartStore (persist after mutation / hydrate on start)                 │
//! │       │                                                                 │
//! │       │  dyn LocalStorage                                               │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shoecart-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │ LocalStorageRepo   │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │◄───│ MemoryStorage      │  │ (embedded) │  │   │
//! │  │   │  SqlitePool   │    │  (storage.rs)      │  │            │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  SQLite: <data dir>/shoecart.db  table local_storage            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`storage`] - The `LocalStorage` trait and the in-memory store
//! - [`repository`] - SQLite-backed implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shoecart_db::{Database, DbConfig, LocalStorage};
//!
//! let db = Database::new(DbConfig::new("shoecart.db")).await?;
//! let storage = db.local_storage();
//!
//! storage.set_item("@RocketShoes:cart", "[]").await?;
//! assert_eq!(storage.get_item("@RocketShoes:cart").await?.as_deref(), Some("[]"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::local_storage::{LocalStorageRepository, StorageEntry};
pub use storage::{LocalStorage, MemoryStorage};
