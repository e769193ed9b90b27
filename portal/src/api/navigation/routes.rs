use crate::api::navigation::handlers::*;
use axum::{Router, routing::get};

/// Creates the navigation router
pub fn navigation_router() -> Router {
    Router::new()
        .route("/", get(navigate))
        .route("/splash", get(splash))
        .route("/landing", get(landing))
}
