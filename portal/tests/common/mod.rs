#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header::CONTENT_TYPE};
use phc_portal::api;
use phc_portal::auth::credentials::StaticCredentialStore;
use phc_portal::auth::session::{NoLatency, SessionManager};
use phc_portal::storage::{MemoryStorage, SessionStorage};
use tower::ServiceExt;

/// Session manager over in-memory storage with no login delay. Not yet
/// restored.
pub fn test_manager(storage: Arc<dyn SessionStorage>) -> Arc<SessionManager> {
    Arc::new(SessionManager::new(
        Arc::new(StaticCredentialStore::demo()),
        storage,
        Arc::new(NoLatency),
    ))
}

/// Restored manager plus the router built around it.
pub fn build_test_app() -> (Router, Arc<SessionManager>) {
    let manager = test_manager(Arc::new(MemoryStorage::new()));
    manager.restore();
    (api::app(manager.clone()), manager)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn login(app: Router, phone: &str, password: &str) -> Response<Body> {
    post_json(
        app,
        "/auth/login",
        serde_json::json!({ "phone": phone, "password": password }),
    )
    .await
}
