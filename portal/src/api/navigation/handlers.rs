use std::sync::Arc;

use axum::extract::{Extension, Query};
use axum::response::Json as ResponseJson;
use serde::{Deserialize, Serialize};

use crate::api::common::ApiResponse;
use crate::auth::router::landing_view_for_name;
use crate::auth::session::SessionManager;
use crate::navigation::{Outcome, View};
use crate::navigation::routes::{navigate as decide, splash_target};

#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct LandingQuery {
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub path: String,
    pub outcome: Outcome,
}

/// Decides what the client should show for `?path=`. Evaluated against the
/// live session on every call.
pub async fn navigate(
    Extension(manager): Extension<Arc<SessionManager>>,
    Query(query): Query<NavigateQuery>,
) -> ResponseJson<ApiResponse<NavigationResponse>> {
    let snapshot = manager.snapshot();
    let outcome = decide(&query.path, &snapshot.auth, snapshot.is_loading());
    tracing::debug!(path = %query.path, ?outcome, "Navigation decided");

    ResponseJson(ApiResponse::ok(NavigationResponse {
        path: query.path,
        outcome,
    }))
}

/// Where the splash screen forwards to.
pub async fn splash(
    Extension(manager): Extension<Arc<SessionManager>>,
) -> ResponseJson<ApiResponse<NavigationResponse>> {
    let snapshot = manager.snapshot();
    ResponseJson(ApiResponse::ok(NavigationResponse {
        path: "/".to_string(),
        outcome: splash_target(&snapshot.auth, snapshot.is_loading()),
    }))
}

/// Landing view for a raw role name, as carried by an external record.
/// Unknown names send the user back to login.
pub async fn landing(
    Query(query): Query<LandingQuery>,
) -> ResponseJson<ApiResponse<NavigationResponse>> {
    let outcome = match landing_view_for_name(&query.role) {
        View::Login => Outcome::Redirect(View::Login),
        view => Outcome::Render(view),
    };
    ResponseJson(ApiResponse::ok(NavigationResponse {
        path: "/dashboard".to_string(),
        outcome,
    }))
}
