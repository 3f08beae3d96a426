use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use pharmacy_core::MedicineId;
use pharmacy_inventory::{InventoryItem, ItemFields};

use super::r#trait::{RecordStore, StoreError, StoreResult};

/// In-memory Record Store for tests/dev.
///
/// Rows are kept in insertion order, mirroring SQLite's natural order for a
/// table without deletes.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    rows: RwLock<Vec<InventoryItem>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<InventoryItem>>> {
        self.rows
            .read()
            .map_err(|_| StoreError::Unavailable("in-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<InventoryItem>>> {
        self.rows
            .write()
            .map_err(|_| StoreError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn create_table(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn insert(&self, item: &InventoryItem) -> StoreResult<()> {
        let mut rows = self.write()?;
        if rows.iter().any(|r| r.id() == item.id()) {
            return Err(StoreError::Conflict(item.id().to_string()));
        }
        rows.push(item.clone());
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<InventoryItem>> {
        Ok(self.read()?.clone())
    }

    async fn get_by_id(&self, id: MedicineId) -> StoreResult<Option<InventoryItem>> {
        Ok(self.read()?.iter().find(|r| r.id() == id).cloned())
    }

    async fn update(&self, id: MedicineId, fields: &ItemFields) -> StoreResult<bool> {
        let mut rows = self.write()?;
        match rows.iter_mut().find(|r| r.id() == id) {
            Some(row) => {
                row.replace_fields(fields.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: MedicineId) -> StoreResult<bool> {
        let mut rows = self.write()?;
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        Ok(rows.len() != before)
    }

    async fn search_by_name_substring(&self, fragment: &str) -> StoreResult<Vec<InventoryItem>> {
        // Same folding as SQLite's default LIKE: ASCII only.
        let needle = fragment.to_ascii_lowercase();
        Ok(self
            .read()?
            .iter()
            .filter(|r| r.name().to_ascii_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
