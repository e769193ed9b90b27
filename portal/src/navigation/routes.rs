//! Route table for the portal and the per-navigation access check.

use crate::auth::gate::{AccessDecision, authorize};
use crate::auth::models::{AuthState, Role};
use crate::auth::router::dashboard_target;
use crate::navigation::{Outcome, View};

const SUPERVISORS: &[Role] = &Role::SUPERVISORS;
const PHARMACY: &[Role] = &[Role::Pharmacist];
const ADMIN: &[Role] = &[Role::Admin];

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Public,
    /// Any signed-in role.
    Authenticated,
    Roles(&'static [Role]),
}

/// What a matched route shows once the guard lets the user through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    View(View),
    /// The signed-in role's landing view.
    Landing,
}

/// A matched route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub destination: Destination,
    pub guard: Guard,
}

impl Route {
    const fn new(view: View, guard: Guard) -> Self {
        Self {
            destination: Destination::View(view),
            guard,
        }
    }

    const fn landing() -> Self {
        Self {
            destination: Destination::Landing,
            guard: Guard::Authenticated,
        }
    }

    /// The fixed view, or `None` when it depends on the session's role.
    pub fn view(&self) -> Option<View> {
        match self.destination {
            Destination::View(view) => Some(view),
            Destination::Landing => None,
        }
    }
}

/// Looks up the route for `path`. Query strings and trailing slashes are
/// ignored; unmatched paths resolve to the public not-found view.
pub fn resolve(path: &str) -> Route {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Route::new(View::Splash, Guard::Public),
        ["login"] => Route::new(View::Login, Guard::Public),
        ["dashboard"] => Route::landing(),
        ["profile"] => Route::new(View::Profile, Guard::Authenticated),
        ["surveys"] => Route::new(View::SurveyList, Guard::Roles(SUPERVISORS)),
        ["surveys", _id] => Route::new(View::SurveyDetail, Guard::Roles(SUPERVISORS)),
        ["visits"] => Route::new(View::Visits, Guard::Roles(SUPERVISORS)),
        ["reports"] => Route::new(View::Reports, Guard::Roles(SUPERVISORS)),
        ["pharmacy", "issue"] => Route::new(View::PharmacyIssue, Guard::Roles(PHARMACY)),
        ["pharmacy", "stock"] => Route::new(View::PharmacyStock, Guard::Roles(PHARMACY)),
        ["admin", "staff"] | ["admin", "staff", "new"] => {
            Route::new(View::StaffManagement, Guard::Roles(ADMIN))
        }
        ["admin", "settings"] | ["admin", "mappings"] => {
            Route::new(View::AdminSettings, Guard::Roles(ADMIN))
        }
        _ => Route::new(View::NotFound, Guard::Public),
    }
}

/// Decides what to show for `path` given the current session.
pub fn navigate(path: &str, session: &AuthState, loading: bool) -> Outcome {
    let route = resolve(path);

    let decision = match route.guard {
        Guard::Public => AccessDecision::Allow,
        Guard::Authenticated => authorize(session, loading, None, None),
        Guard::Roles(roles) => authorize(session, loading, Some(roles), None),
    };

    match decision {
        AccessDecision::Pending => Outcome::Loading,
        AccessDecision::Deny { redirect_to } => Outcome::Redirect(redirect_to),
        AccessDecision::Allow => match route.destination {
            Destination::View(view) => Outcome::Render(view),
            Destination::Landing => dashboard_target(session, loading),
        },
    }
}

/// Where the splash screen sends the user once restore has finished.
pub fn splash_target(session: &AuthState, loading: bool) -> Outcome {
    if loading {
        Outcome::Loading
    } else if session.is_authenticated() {
        dashboard_target(session, loading)
    } else {
        Outcome::Redirect(View::Login)
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
    fn test_resolve_table() {
        assert_eq!(resolve("/").view(), Some(View::Splash));
        assert_eq!(resolve("/login").guard, Guard::Public);
        assert_eq!(resolve("/profile").guard, Guard::Authenticated);
        assert_eq!(resolve("/surveys/SB-104").view(), Some(View::SurveyDetail));
        assert_eq!(resolve("/visits/").view(), Some(View::Visits));
        assert_eq!(resolve("/pharmacy/stock?filter=low").view(), Some(View::PharmacyStock));
        assert_eq!(resolve("/admin/staff/new").view(), Some(View::StaffManagement));
        assert_eq!(resolve("/admin/mappings").view(), Some(View::AdminSettings));
        assert_eq!(resolve("/nope").view(), Some(View::NotFound));
        assert_eq!(resolve("/surveys/a/b").view(), Some(View::NotFound));
    }

    #[test]
    fn test_dashboard_is_the_only_role_dependent_route() {
        let dashboard = resolve("/dashboard");
        assert_eq!(dashboard.destination, Destination::Landing);
        assert_eq!(dashboard.view(), None);
        assert_eq!(dashboard.guard, Guard::Authenticated);

        let fixed = [
            "/",
            "/login",
            "/profile",
            "/surveys",
            "/visits",
            "/reports",
            "/pharmacy/issue",
            "/admin/staff",
            "/nope",
        ];
        for path in fixed {
            assert!(resolve(path).view().is_some(), "{path} should resolve to a fixed view");
        }
    }

    #[test]
    fn test_dashboard_follows_role() {
        assert_eq!(
            navigate("/dashboard", &session_for("9876543210"), false),
            Outcome::Render(View::SupervisorDashboard)
        );
        assert_eq!(
            navigate("/dashboard", &session_for("9876543211"), false),
            Outcome::Render(View::PharmacyDashboard)
        );
        assert_eq!(
            navigate("/dashboard", &session_for("9876543212"), false),
            Outcome::Render(View::AdminDashboard)
        );
    }

    #[test]
    fn test_guarded_routes() {
        let anm = session_for("9876543213");
        assert_eq!(navigate("/visits", &anm, false), Outcome::Render(View::Visits));
        assert_eq!(
            navigate("/pharmacy/issue", &anm, false),
            Outcome::Redirect(View::SupervisorDashboard)
        );

        let pharmacist = session_for("9876543211");
        assert_eq!(
            navigate("/admin/settings", &pharmacist, false),
            Outcome::Redirect(View::PharmacyDashboard)
        );
        assert_eq!(
            navigate("/pharmacy/stock", &pharmacist, false),
            Outcome::Render(View::PharmacyStock)
        );

        let admin = session_for("9876543212");
        assert_eq!(
            navigate("/surveys", &admin, false),
            Outcome::Redirect(View::AdminDashboard)
        );
    }

    #[test]
    fn test_signed_out_and_loading() {
        let signed_out = AuthState::empty();
        assert_eq!(
            navigate("/profile", &signed_out, false),
            Outcome::Redirect(View::Login)
        );
        assert_eq!(navigate("/profile", &signed_out, true), Outcome::Loading);
        assert_eq!(navigate("/login", &signed_out, true), Outcome::Render(View::Login));
        assert_eq!(navigate("/missing", &signed_out, false), Outcome::Render(View::NotFound));
    }

    #[test]
    fn test_splash_target() {
        assert_eq!(splash_target(&AuthState::empty(), true), Outcome::Loading);
        assert_eq!(
            splash_target(&AuthState::empty(), false),
            Outcome::Redirect(View::Login)
        );
        assert_eq!(
            splash_target(&session_for("9876543212"), false),
            Outcome::Render(View::AdminDashboard)
        );
    }
}
