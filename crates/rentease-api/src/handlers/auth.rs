// ============================================================================
// RentEase API - Auth Handlers
// File: crates/rentease-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (register, login)

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::response::{domain_error_response, ApiResponse};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    let session = state
        .auth
        .register(&payload.name, &payload.email, &payload.password)
        .await
        .map_err(domain_error_response)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(session.into()))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let session = state
        .auth
        .login(&payload.email, &payload.password)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(session.into())))
}
