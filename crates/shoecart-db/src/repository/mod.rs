//! # Repository Module
//!
//! Database repository implementations for Shoecart.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartStore                                                              │
//! │       │                                                                 │
//! │       │  storage.set_item("@RocketShoes:cart", json)                    │
//! │       ▼                                                                 │
//! │  LocalStorageRepository                                                 │
//! │  ├── get_item / get_entry                                               │
//! │  ├── set_item (upsert)                                                  │
//! │  ├── remove_item / clear                                                │
//! │  └── keys                                                               │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite table local_storage                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod local_storage;
