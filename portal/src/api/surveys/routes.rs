use crate::api::surveys::handlers::*;
use crate::auth::middleware::supervisor_auth;
use axum::{Router, middleware, routing::get};

/// Creates the survey router, restricted to supervisory roles
pub fn surveys_router() -> Router {
    Router::new()
        .route("/", get(list_surveys))
        .route_layer(middleware::from_fn(supervisor_auth))
}
