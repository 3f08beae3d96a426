use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use pharmacy_core::MedicineId;
use pharmacy_inventory::{InventoryItem, ItemFields};

/// Result type for Record Store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Record Store operation error.
///
/// These are **infrastructure errors** as opposed to domain errors
/// (validation). None of them is retried; the request that hit one is
/// aborted.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A row with the same primary key already exists.
    #[error("record already exists: {0}")]
    Conflict(String),

    /// The storage medium could not be reached (closed pool, I/O, cannot open).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A stored row could not be turned back into an item.
    #[error("malformed stored record: {0}")]
    Decode(String),

    /// Any other failure reported by the database.
    #[error("database error: {0}")]
    Database(String),
}

/// Data-access boundary for inventory items.
///
/// Every method maps to exactly one statement against the storage medium.
/// Implementations enforce nothing beyond primary key uniqueness; callers
/// validate input before reaching the store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Ensure the schema exists. Idempotent; safe to call on every startup.
    async fn create_table(&self) -> StoreResult<()>;

    /// Write a new row. Fails with [`StoreError::Conflict`] if the id is taken.
    async fn insert(&self, item: &InventoryItem) -> StoreResult<()>;

    /// All rows in natural storage order.
    async fn list_all(&self) -> StoreResult<Vec<InventoryItem>>;

    /// The matching row, or `None`. A missing id is not an error.
    async fn get_by_id(&self, id: MedicineId) -> StoreResult<Option<InventoryItem>>;

    /// Overwrite every mutable field of the matching row.
    ///
    /// A missing id is a silent no-op: nothing is created and no error is
    /// raised. The returned flag tells whether a row matched.
    async fn update(&self, id: MedicineId, fields: &ItemFields) -> StoreResult<bool>;

    /// Remove the matching row. A missing id is a silent no-op; the returned
    /// flag tells whether a row was removed.
    async fn delete_by_id(&self, id: MedicineId) -> StoreResult<bool>;

    /// Items whose name contains `fragment`, ASCII case-insensitively.
    ///
    /// `%` and `_` in the fragment match literally. An empty fragment matches
    /// every row; the HTTP layer rejects it before getting here.
    async fn search_by_name_substring(&self, fragment: &str) -> StoreResult<Vec<InventoryItem>>;
}

#[async_trait]
impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    async fn create_table(&self) -> StoreResult<()> {
        (**self).create_table().await
    }

    async fn insert(&self, item: &InventoryItem) -> StoreResult<()> {
        (**self).insert(item).await
    }

    async fn list_all(&self) -> StoreResult<Vec<InventoryItem>> {
        (**self).list_all().await
    }

    async fn get_by_id(&self, id: MedicineId) -> StoreResult<Option<InventoryItem>> {
        (**self).get_by_id(id).await
    }

    async fn update(&self, id: MedicineId, fields: &ItemFields) -> StoreResult<bool> {
        (**self).update(id, fields).await
    }

    async fn delete_by_id(&self, id: MedicineId) -> StoreResult<bool> {
        (**self).delete_by_id(id).await
    }

    async fn search_by_name_substring(&self, fragment: &str) -> StoreResult<Vec<InventoryItem>> {
        (**self).search_by_name_substring(fragment).await
    }
}
