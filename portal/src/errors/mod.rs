//! Portal-wide error types.
//!
//! Every failure in the session core degrades to either "show login" or
//! "show an inline error"; none of these variants is fatal to the process.

use thiserror::Error;

/// Generic portal error shared by the session core, services and API layer.
#[derive(Debug, Error)]
pub enum PortalError {
    /// No credential record exists for the identifier.
    #[error("User not found. Please check your phone number.")]
    NotFound { identifier: String },

    /// A record exists but the secret does not match.
    #[error("Invalid password. Please try again.")]
    InvalidSecret,

    /// The persisted session could not be decoded. Recovered locally.
    #[error("Stored session is malformed: {reason}")]
    MalformedStoredSession { reason: String },

    /// A role name outside the known set. Treated as an invalid session.
    #[error("Unknown role: {value}")]
    UnknownRole { value: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {source}")]
    Storage {
        #[from]
        source: anyhow::Error,
    },
}

pub type PortalResult<T> = Result<T, PortalError>;

impl PortalError {
    // Helper constructors for common patterns

    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedStoredSession {
            reason: reason.into(),
        }
    }

    pub fn unknown_role(value: impl Into<String>) -> Self {
        Self::UnknownRole {
            value: value.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for the two failures a login form reports inline.
    pub fn is_login_failure(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidSecret)
    }
}
