//! Shared response envelope and error conversion for the HTTP surface.
//!
//! All endpoints answer with [`ApiResponse`]:
//! - `success`: whether the request succeeded
//! - `data`: payload on success
//! - `message`: human-readable message, shown inline by the client
//! - `error`: machine-readable `error_type` on failure

use crate::errors::PortalError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Standard API response wrapper for all endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    pub timestamp: String,
}

/// Error details for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub error_type: String,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a successful response with default message
    pub fn ok(data: T) -> Self {
        Self::success(data, "Request successful")
    }

    /// Create an error response
    pub fn error(message: impl Into<String>, error_type: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
            error: Some(ErrorDetails {
                error_type: error_type.into(),
            }),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Serializes an error envelope into the `(StatusCode, String)` rejection
/// used by every handler.
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    error_type: &str,
) -> (StatusCode, String) {
    let body = ApiResponse::<()>::error(message, error_type);
    let body = serde_json::to_string(&body).unwrap_or_else(|_| {
        format!(r#"{{"success":false,"message":"{error_type}"}}"#)
    });
    (status, body)
}

/// Converts PortalError to appropriate HTTP response with standard format
pub fn portal_error_to_http(error: PortalError) -> (StatusCode, String) {
    let message = error.to_string();
    let (status, error_type) = match &error {
        PortalError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        PortalError::InvalidSecret => (StatusCode::UNAUTHORIZED, "invalid_secret"),
        PortalError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
        PortalError::PermissionDenied { .. } => (StatusCode::FORBIDDEN, "permission_denied"),
        // Both only arise from a broken session record; the client re-logs in.
        PortalError::UnknownRole { .. } | PortalError::MalformedStoredSession { .. } => {
            (StatusCode::UNAUTHORIZED, "invalid_session")
        }
        PortalError::Internal { .. } | PortalError::Storage { .. } => {
            tracing::error!("Internal error: {}", error);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                "internal_error",
            );
        }
    };

    error_response(status, message, error_type)
}
