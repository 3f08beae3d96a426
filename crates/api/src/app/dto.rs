use serde::Deserialize;

use crate::app::flash::{Flash, FlashKind};

// -------------------------
// Request DTOs
// -------------------------

// The add/edit form body is `pharmacy_inventory::ItemForm`.

/// Body of `POST /search`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_name: String,
}

/// Query string carrying a flash message across a redirect.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FlashQuery {
    pub flash: Option<String>,
    pub kind: Option<FlashKind>,
}

impl FlashQuery {
    /// The flash to show on this page, if any.
    pub fn into_flashes(self) -> Vec<Flash> {
        match self.flash {
            Some(message) if !message.is_empty() => vec![Flash {
                kind: self.kind.unwrap_or(FlashKind::Info),
                message,
            }],
            _ => Vec::new(),
        }
    }
}
