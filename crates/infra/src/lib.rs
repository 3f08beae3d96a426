//! Infrastructure layer: the SQLite-backed Record Store and process config.

pub mod config;
pub mod record_store;

pub use config::{Config, ConfigError};
pub use record_store::{InMemoryRecordStore, RecordStore, SqliteRecordStore, StoreError, StoreResult};
