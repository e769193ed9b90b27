//! Data structures for authentication-related entities.
//!
//! Defines the closed set of staff roles, the user profile issued on login,
//! the session record persisted between restarts, and the login request
//! payload.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::auth::router::landing_view;
use crate::auth::session::{SessionPhase, SessionSnapshot};
use crate::errors::{PortalError, PortalResult};
use crate::navigation::View;

/// Staff roles known to the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Lady Health Visitor.
    Lhv,
    /// Auxiliary Nurse Midwife.
    Anm,
    AshaSupervisor,
    LabTech,
    Pharmacist,
    Admin,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Lhv,
        Role::Anm,
        Role::AshaSupervisor,
        Role::LabTech,
        Role::Pharmacist,
        Role::Admin,
    ];

    /// Field-health supervisory roles (survey verification, visit tracking).
    pub const SUPERVISORS: [Role; 3] = [Role::Lhv, Role::Anm, Role::AshaSupervisor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Lhv => "LHV",
            Role::Anm => "ANM",
            Role::AshaSupervisor => "ASHA_SUPERVISOR",
            Role::LabTech => "LAB_TECH",
            Role::Pharmacist => "PHARMACIST",
            Role::Admin => "ADMIN",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| PortalError::unknown_role(s))
    }
}

/// Profile of an authenticated staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    /// 10-digit phone number, doubles as the login identifier.
    pub phone: String,
    pub role: Role,
    pub phc_id: String,
    pub phc_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_centres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub villages: Option<Vec<String>>,
}

impl UserProfile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Current authentication state for the device.
///
/// `is_authenticated` is true exactly when both `user` and `token` are set.
/// The only constructors are [`AuthState::empty`], [`AuthState::authenticated`]
/// and [`AuthState::from_json`], which enforce that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    is_authenticated: bool,
    user: Option<UserProfile>,
    token: Option<String>,
}

impl AuthState {
    pub fn empty() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            token: None,
        }
    }

    pub fn authenticated(user: UserProfile, token: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            token: Some(token.into()),
        }
    }

    /// Decodes a persisted record, rejecting anything that breaks the
    /// authenticated-iff-user-and-token invariant.
    pub fn from_json(raw: &str) -> PortalResult<Self> {
        let state: AuthState =
            serde_json::from_str(raw).map_err(|e| PortalError::malformed(e.to_string()))?;

        let complete = state.user.is_some() && state.token.is_some();
        let empty = state.user.is_none() && state.token.is_none();
        match (state.is_authenticated, complete, empty) {
            (true, true, _) | (false, _, true) => Ok(state),
            _ => Err(PortalError::malformed(
                "isAuthenticated does not match user/token presence",
            )),
        }
    }

    pub fn to_json(&self) -> PortalResult<String> {
        serde_json::to_string(self).map_err(|e| anyhow::Error::new(e).into())
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::empty()
    }
}

/// Record held by the credential store for one staff identifier.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub secret: String,
    pub profile: UserProfile,
}

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both phone number and password";
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid 10-digit phone number";

/// Login request payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        length(min = 1, code = "required", message = "Please enter both phone number and password"),
        custom(function = "validate_phone_digits")
    )]
    pub phone: String,

    #[validate(length(min = 1, code = "required", message = "Please enter both phone number and password"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(phone: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            password: password.into(),
        }
    }

    /// Runs field validation and folds the result into a single inline
    /// message. Missing fields win over a malformed phone number.
    pub fn check(&self) -> PortalResult<()> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let missing = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .any(|err| err.code == "required");

        if missing {
            Err(PortalError::validation(MISSING_FIELDS_MESSAGE))
        } else {
            Err(PortalError::validation(INVALID_PHONE_MESSAGE))
        }
    }
}

/// Session payload returned by login and `/auth/me`
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub phase: SessionPhase,
    pub signing_in: bool,
    pub session: AuthState,
    /// Where `/dashboard` leads for this session
    pub landing_view: Option<View>,
    /// Dashboard header, e.g. "Hello, Sunita!"
    pub greeting: Option<String>,
}

impl SessionResponse {
    pub fn new(snapshot: SessionSnapshot, signing_in: bool) -> Self {
        let landing_view = snapshot.auth.role().map(landing_view);
        let greeting = snapshot
            .auth
            .user()
            .map(|user| format!("Hello, {}!", user.first_name()));
        Self {
            phase: snapshot.phase,
            signing_in,
            session: snapshot.auth,
            landing_view,
            greeting,
        }
    }
}

#[allow(clippy::ptr_arg)]
fn validate_phone_digits(phone: &String) -> Result<(), ValidationError> {
    // Empty input is reported by the length rule.
    if phone.is_empty() || (phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())) {
        return Ok(());
    }
    let mut error = ValidationError::new("phone_format");
    error.message = Some(INVALID_PHONE_MESSAGE.into());
    Err(error)
}
