use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pharmacy_core::MedicineId;

/// The mutable part of a medicine record.
///
/// Updates always replace every field; there is no partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub expiration_date: NaiveDate,
}

/// One medicine record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: MedicineId,
    #[serde(flatten)]
    fields: ItemFields,
}

impl InventoryItem {
    /// Create a record with a freshly generated id.
    pub fn create(fields: ItemFields) -> Self {
        Self::with_id(MedicineId::new(), fields)
    }

    /// Rebuild a record whose id is already known (e.g. loaded from storage).
    pub fn with_id(id: MedicineId, fields: ItemFields) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> MedicineId {
        self.id
    }

    pub fn fields(&self) -> &ItemFields {
        &self.fields
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn quantity(&self) -> i64 {
        self.fields.quantity
    }

    pub fn price(&self) -> f64 {
        self.fields.price
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.fields.expiration_date
    }

    /// Overwrite every mutable field; the id never changes.
    pub fn replace_fields(&mut self, fields: ItemFields) {
        self.fields = fields;
    }
}
