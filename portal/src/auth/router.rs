//! Maps an authenticated role to its landing view.

use crate::auth::models::{AuthState, Role};
use crate::navigation::{Outcome, View};

/// Landing view for `role`.
///
/// Lab technicians land on the supervisor dashboard until a dedicated lab
/// view exists.
pub fn landing_view(role: Role) -> View {
    match role {
        Role::Lhv | Role::Anm | Role::AshaSupervisor => View::SupervisorDashboard,
        Role::Pharmacist => View::PharmacyDashboard,
        Role::Admin => View::AdminDashboard,
        Role::LabTech => View::SupervisorDashboard,
    }
}

/// Landing view for a raw role name. Unknown names are an invalid session
/// and send the user back to login.
pub fn landing_view_for_name(role: &str) -> View {
    match role.parse::<Role>() {
        Ok(role) => landing_view(role),
        Err(e) => {
            tracing::warn!(error = %e, "Routing unknown role to login");
            View::Login
        }
    }
}

/// Resolves `/dashboard` for the current session.
pub fn dashboard_target(session: &AuthState, loading: bool) -> Outcome {
    if loading {
        return Outcome::Loading;
    }
    match session.role() {
        Some(role) if session.is_authenticated() => Outcome::Render(landing_view(role)),
        _ => Outcome::Redirect(View::Login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::{CredentialStore, StaticCredentialStore};

    #[test]
    fn test_landing_views() {
        assert_eq!(landing_view(Role::Lhv), View::SupervisorDashboard);
        assert_eq!(landing_view(Role::Anm), View::SupervisorDashboard);
        assert_eq!(landing_view(Role::AshaSupervisor), View::SupervisorDashboard);
        assert_eq!(landing_view(Role::Pharmacist), View::PharmacyDashboard);
        assert_eq!(landing_view(Role::Admin), View::AdminDashboard);
    }

    #[test]
    fn test_lab_tech_falls_back_to_supervisor_dashboard() {
        assert_eq!(landing_view(Role::LabTech), View::SupervisorDashboard);
        assert_eq!(landing_view_for_name("LAB_TECH"), View::SupervisorDashboard);
    }

    #[test]
    fn test_unknown_role_name_routes_to_login() {
        assert_eq!(landing_view_for_name("DOCTOR"), View::Login);
        assert_eq!(landing_view_for_name("lhv"), View::Login);
        assert_eq!(landing_view_for_name("PHARMACIST"), View::PharmacyDashboard);
    }

    #[test]
    fn test_dashboard_target() {
        let profile = StaticCredentialStore::demo()
            .lookup("9876543211")
            .unwrap()
            .profile
            .clone();
        let session = AuthState::authenticated(profile, "tok");

        assert_eq!(dashboard_target(&session, true), Outcome::Loading);
        assert_eq!(
            dashboard_target(&session, false),
            Outcome::Render(View::PharmacyDashboard)
        );
        assert_eq!(
            dashboard_target(&AuthState::empty(), false),
            Outcome::Redirect(View::Login)
        );
    }
}
