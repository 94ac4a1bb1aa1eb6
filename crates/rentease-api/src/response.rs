//! API response envelope and error mapping

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use rentease_core::DomainError;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Map a domain failure onto the HTTP status taxonomy. Internal failures get
/// a generic message; their detail stays in the logs.
pub fn domain_error_response(err: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let (status, code) = match &err {
        DomainError::UserNotFound(_)
        | DomainError::PropertyNotFound(_)
        | DomainError::TenantNotFound(_) => (StatusCode::NOT_FOUND, "RESOURCE_NOT_FOUND"),
        DomainError::EmailAlreadyExists(_) => (StatusCode::CONFLICT, "RESOURCE_ALREADY_EXISTS"),
        DomainError::PropertyHasTenants(_) => (StatusCode::CONFLICT, "RESOURCE_CONFLICT"),
        DomainError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "AUTHENTICATION_FAILED"),
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        DomainError::PasswordHash(_) | DomainError::TokenGeneration(_) | DomainError::Database(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    };

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "Internal server error".to_string()
    } else {
        err.to_string()
    };

    (status, Json(ApiResponse::error(code, &message)))
}
