//! Record Store: durable storage and retrieval of inventory items.
//!
//! This module defines the data-access boundary around the single
//! `inventory` table, plus a SQLite implementation (production) and an
//! in-memory one (tests/dev).

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryRecordStore;
pub use r#trait::{RecordStore, StoreError, StoreResult};
pub use sqlite::SqliteRecordStore;
