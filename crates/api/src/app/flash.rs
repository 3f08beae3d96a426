//! One-shot user-facing messages.
//!
//! A flash rides along a `303 See Other` redirect in the query string
//! (`?flash=<message>&kind=<kind>`) and is rendered once by the page the
//! browser lands on.
//!
//! Nothing ties a flash to the request that produced it, so any link can
//! show arbitrary banner text (`/?flash=...&kind=success`). Views escape the
//! text, which limits this to content spoofing.

use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Danger,
    #[serde(other)]
    Info,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Danger,
            message: message.into(),
        }
    }
}

/// `path` with the flash appended as query parameters.
pub fn flash_url(path: &str, flash: &Flash) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("flash", &flash.message)
        .append_pair("kind", flash.kind.as_str())
        .finish();
    format!("{path}?{query}")
}

/// `303 See Other` to `path`, carrying `flash`.
pub fn redirect_with(path: &str, flash: Flash) -> Response {
    Redirect::to(&flash_url(path, &flash)).into_response()
}
