use std::sync::Arc;

use pharmacy_infra::RecordStore;

/// Handles shared by every request.
///
/// Nothing here is mutable; all state lives in the store.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn RecordStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}
