//! HTTP surface over the session core.

pub mod common;
pub mod navigation;
pub mod pharmacy;
pub mod surveys;
pub mod visits;

use std::sync::Arc;

use axum::{Extension, Router, response::Json, routing::get};

use crate::api::common::ApiResponse;
use crate::auth;
use crate::auth::session::SessionManager;

/// Builds the full application router around one shared session manager.
pub fn app(manager: Arc<SessionManager>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/auth", auth::routes::auth_router())
        .nest("/navigate", navigation::routes::navigation_router())
        .nest("/api/pharmacy", pharmacy::routes::pharmacy_router())
        .nest("/api/surveys", surveys::routes::surveys_router())
        .nest("/api/visits", visits::routes::visits_router())
        .layer(Extension(manager))
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "PHC Staff Portal",
            "version": env!("CARGO_PKG_VERSION")
        }),
        "Welcome to the PHC Staff Portal API",
    ))
}
