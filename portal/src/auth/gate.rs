//! Access gate evaluated before rendering a role-restricted view.
//!
//! Decisions are computed from the session on every navigation and never
//! cached, since a logout can happen at any time.

use serde::Serialize;

use crate::auth::models::{AuthState, Role};
use crate::auth::router::landing_view;
use crate::navigation::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AccessDecision {
    Allow,
    /// Session restore is still running. Render a loading indicator rather
    /// than flashing the login view.
    Pending,
    Deny { redirect_to: View },
}

impl AccessDecision {
    pub fn deny(redirect_to: View) -> Self {
        Self::Deny { redirect_to }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decides whether the current session may see a view guarded by
/// `required_roles`.
///
/// `None` or an empty slice means any authenticated role. A role mismatch
/// redirects to `fallback` when given, otherwise to the role's landing view.
pub fn authorize(
    session: &AuthState,
    loading: bool,
    required_roles: Option<&[Role]>,
    fallback: Option<View>,
) -> AccessDecision {
    if loading {
        return AccessDecision::Pending;
    }

    let role = match session.role() {
        Some(role) if session.is_authenticated() => role,
        _ => return AccessDecision::deny(View::Login),
    };

    match required_roles {
        Some(roles) if !roles.is_empty() && !roles.contains(&role) => {
            AccessDecision::deny(fallback.unwrap_or_else(|| landing_view(role)))
        }
        _ => AccessDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::{CredentialStore, StaticCredentialStore};

    fn session_for(identifier: &str) -> AuthState {
        let store = StaticCredentialStore::demo();
        let profile = store.lookup(identifier).unwrap().profile.clone();
        AuthState::authenticated(profile, "tok")
    }

    #[test]
    fn test_pending_while_loading_regardless_of_session() {
        let signed_in = session_for("9876543212");
        for session in [AuthState::empty(), signed_in] {
            assert_eq!(
                authorize(&session, true, Some(&[Role::Admin]), None),
                AccessDecision::Pending
            );
            assert_eq!(authorize(&session, true, None, None), AccessDecision::Pending);
        }
    }

    #[test]
    fn test_unauthenticated_is_sent_to_login() {
        let session = AuthState::empty();
        assert_eq!(
            authorize(&session, false, None, None),
            AccessDecision::deny(View::Login)
        );
        assert_eq!(
            authorize(&session, false, Some(&[Role::Pharmacist]), Some(View::Profile)),
            AccessDecision::deny(View::Login)
        );
    }

    #[test]
    fn test_allow_when_role_matches_or_no_roles_required() {
        let session = session_for("9876543210");
        assert!(authorize(&session, false, None, None).is_allowed());
        assert!(authorize(&session, false, Some(&[]), None).is_allowed());
        assert!(authorize(&session, false, Some(&Role::SUPERVISORS), None).is_allowed());
    }

    #[test]
    fn test_pharmacist_denied_admin_view_goes_to_pharmacy_dashboard() {
        let session = session_for("9876543211");
        assert_eq!(
            authorize(&session, false, Some(&[Role::Admin]), None),
            AccessDecision::deny(View::PharmacyDashboard)
        );
    }

    #[test]
    fn test_caller_fallback_overrides_landing_view() {
        let session = session_for("9876543213");
        assert_eq!(
            authorize(&session, false, Some(&[Role::Admin]), Some(View::Profile)),
            AccessDecision::deny(View::Profile)
        );
    }

    #[test]
    fn test_decision_serialization() {
        let json = serde_json::to_value(AccessDecision::deny(View::Login)).unwrap();
        assert_eq!(json["decision"], "deny");
        assert_eq!(json["redirect_to"], "login");

        let json = serde_json::to_value(AccessDecision::Pending).unwrap();
        assert_eq!(json["decision"], "pending");
    }
}
