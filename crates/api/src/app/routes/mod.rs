use axum::{routing::get, Router};

pub mod inventory;
pub mod system;

/// Router for every endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(inventory::router())
}
