//! Inventory domain module.
//!
//! This crate contains the medicine record and the validation applied to raw
//! form input, implemented purely as deterministic logic (no IO, no HTTP, no
//! storage).

pub mod form;
pub mod item;

pub use form::{ItemForm, EXPIRATION_DATE_FORMAT};
pub use item::{InventoryItem, ItemFields};
