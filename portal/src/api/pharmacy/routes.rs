use crate::api::pharmacy::handlers::*;
use crate::auth::middleware::pharmacist_auth;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the pharmacy router. Every route runs the access gate first.
pub fn pharmacy_router() -> Router {
    Router::new()
        .route("/stock", get(stock))
        .route("/issue/quantity", post(adjust_issue))
        .route_layer(middleware::from_fn(pharmacist_auth))
}
