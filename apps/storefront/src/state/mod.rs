//! # State Module
//!
//! Long-lived state shared by every command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐     ┌──────────────────────────────┐ │
//! │  │          CartStore           │     │          AppConfig           │ │
//! │  │                              │     │                              │ │
//! │  │  Arc<dyn CatalogApi>         │     │  api_url, timeout            │ │
//! │  │  Arc<dyn LocalStorage>       │     │  db_path, storage_key        │ │
//! │  │  Arc<dyn ToastSink>          │     │  locale                      │ │
//! │  │  RwLock<Cart> + async gate   │     │                              │ │
//! │  └──────────────────────────────┘     └──────────────────────────────┘ │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore: mutations serialized by the gate, reads by RwLock        │
//! │  • AppConfig: read-only after initialization                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartStore, StoreOptions};
pub use config::AppConfig;
