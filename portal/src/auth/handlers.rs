//! Handler functions for authentication-related API endpoints.
//!
//! These functions parse request data, validate input and delegate to the
//! shared [`SessionManager`] for the session lifecycle.

use std::sync::Arc;

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};

use crate::api::common::{ApiResponse, portal_error_to_http};
use crate::auth::models::{LoginRequest, SessionResponse};
use crate::auth::session::SessionManager;
use crate::errors::PortalError;

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(manager): Extension<Arc<SessionManager>>,
    Json(payload): Json<LoginRequest>,
) -> Result<ResponseJson<ApiResponse<SessionResponse>>, (StatusCode, String)> {
    payload.check().map_err(portal_error_to_http)?;

    // The login settles on its own task even if this client goes away.
    let attempt = manager.spawn_login(payload.phone, payload.password);
    let joined = attempt.await.map_err(|e| {
        portal_error_to_http(PortalError::internal(format!("login task failed: {e}")))
    })?;
    joined.map_err(|e| {
        if e.is_login_failure() {
            tracing::info!(error = %e, "Login attempt rejected");
        }
        portal_error_to_http(e)
    })?;

    Ok(ResponseJson(ApiResponse::success(
        SessionResponse::new(manager.snapshot(), manager.is_signing_in()),
        "Login successful!",
    )))
}

/// Handle logout request
#[axum::debug_handler]
pub async fn logout(
    Extension(manager): Extension<Arc<SessionManager>>,
) -> ResponseJson<ApiResponse<SessionResponse>> {
    manager.logout();
    ResponseJson(ApiResponse::success(
        SessionResponse::new(manager.snapshot(), manager.is_signing_in()),
        "Logged out",
    ))
}

/// Current session, including whether restore is still running
#[axum::debug_handler]
pub async fn me(
    Extension(manager): Extension<Arc<SessionManager>>,
) -> ResponseJson<ApiResponse<SessionResponse>> {
    ResponseJson(ApiResponse::ok(SessionResponse::new(
        manager.snapshot(),
        manager.is_signing_in(),
    )))
}
