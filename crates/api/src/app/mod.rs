//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the Record Store handle shared by every handler
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: form/query DTOs
//! - `flash.rs`: one-shot messages carried across redirects
//! - `views.rs`: HTML rendering
//! - `errors.rs`: mapping failures to user-facing messages

use std::sync::Arc;

use axum::{Extension, Router};

use pharmacy_infra::RecordStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod flash;
pub mod routes;
pub mod services;
pub mod views;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(store: Arc<dyn RecordStore>) -> Router {
    let services = Arc::new(services::AppServices::new(store));

    routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn(middleware::request_log))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use pharmacy_infra::InMemoryRecordStore;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_is_ok() {
        let app = build_app(Arc::new(InMemoryRecordStore::new()));
        let res = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn index_renders_html() {
        let app = build_app(Arc::new(InMemoryRecordStore::new()));
        let res = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn get_search_redirects_home() {
        let app = build_app(Arc::new(InMemoryRecordStore::new()));
        let res = app
            .oneshot(Request::get("/search").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/");
    }
}
