//! Views of the portal and the route table that guards them.

pub mod routes;

use serde::{Deserialize, Serialize};

/// Every screen a request can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Splash,
    Login,
    SupervisorDashboard,
    PharmacyDashboard,
    AdminDashboard,
    Profile,
    SurveyList,
    SurveyDetail,
    Visits,
    Reports,
    PharmacyIssue,
    PharmacyStock,
    StaffManagement,
    AdminSettings,
    NotFound,
}

impl View {
    /// Canonical path used when redirecting to this view.
    pub fn path(&self) -> &'static str {
        match self {
            View::Splash => "/",
            View::Login => "/login",
            View::SupervisorDashboard | View::PharmacyDashboard | View::AdminDashboard => {
                "/dashboard"
            }
            View::Profile => "/profile",
            View::SurveyList | View::SurveyDetail => "/surveys",
            View::Visits => "/visits",
            View::Reports => "/reports",
            View::PharmacyIssue => "/pharmacy/issue",
            View::PharmacyStock => "/pharmacy/stock",
            View::StaffManagement => "/admin/staff",
            View::AdminSettings => "/admin/settings",
            View::NotFound => "/404",
        }
    }
}

/// What the navigation surface should do for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "view", rename_all = "snake_case")]
pub enum Outcome {
    /// Render the view.
    Render(View),
    /// Session restore has not finished; show a neutral loading indicator.
    Loading,
    /// Navigate to another view, replacing the current history entry.
    Redirect(View),
}

impl Outcome {
    /// The view that ends up on screen, if any.
    pub fn view(&self) -> Option<View> {
        match self {
            Outcome::Render(view) | Outcome::Redirect(view) => Some(*view),
            Outcome::Loading => None,
        }
    }
}
