//! Middleware running the access gate in front of API routes.
//!
//! Expects the shared [`SessionManager`] in the request extensions (added by
//! the top-level router) and evaluates the gate on every request.

use std::sync::Arc;

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};

use crate::api::common::{error_response, portal_error_to_http};
use crate::auth::gate::{AccessDecision, authorize};
use crate::auth::models::Role;
use crate::auth::session::SessionManager;
use crate::errors::PortalError;
use crate::navigation::View;

/// Maps a gate decision to a rejection, or `Ok` when allowed.
pub fn check_access(
    manager: &SessionManager,
    required_roles: Option<&[Role]>,
) -> Result<(), (StatusCode, String)> {
    let snapshot = manager.snapshot();
    match authorize(&snapshot.auth, snapshot.is_loading(), required_roles, None) {
        AccessDecision::Allow => Ok(()),
        AccessDecision::Pending => Err(error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Session is still loading",
            "session_loading",
        )),
        AccessDecision::Deny { redirect_to } if redirect_to == View::Login => {
            Err(error_response(
                StatusCode::UNAUTHORIZED,
                "Please sign in to continue",
                "unauthenticated",
            ))
        }
        AccessDecision::Deny { redirect_to } => {
            tracing::debug!(?redirect_to, role = ?snapshot.auth.role(), "Access denied");
            Err(portal_error_to_http(PortalError::permission_denied(format!(
                "your role cannot open this page, go to {}",
                redirect_to.path()
            ))))
        }
    }
}

fn manager_from(request: &Request) -> Result<Arc<SessionManager>, (StatusCode, String)> {
    request
        .extensions()
        .get::<Arc<SessionManager>>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("SessionManager extension missing from request");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                "internal_error",
            )
        })
}

/// Requires the pharmacist role.
pub async fn pharmacist_auth(
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let manager = manager_from(&request)?;
    check_access(&manager, Some(&[Role::Pharmacist]))?;
    Ok(next.run(request).await)
}

/// Requires one of the field-supervision roles.
pub async fn supervisor_auth(
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let manager = manager_from(&request)?;
    check_access(&manager, Some(&Role::SUPERVISORS))?;
    Ok(next.run(request).await)
}
