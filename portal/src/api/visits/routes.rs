use crate::api::visits::handlers::*;
use crate::auth::middleware::supervisor_auth;
use axum::{Router, middleware, routing::get};

/// Creates the visits router, restricted to supervisory roles
pub fn visits_router() -> Router {
    Router::new()
        .route("/", get(list_visits))
        .route_layer(middleware::from_fn(supervisor_auth))
}
