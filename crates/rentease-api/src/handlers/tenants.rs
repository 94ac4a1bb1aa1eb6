//! Tenant HTTP handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::dto::{TenantRequest, TenantResponse};
use crate::middleware::AuthUser;
use crate::response::{domain_error_response, ApiResponse};
use crate::state::AppState;
use rentease_shared::EntityId;

/// POST /api/tenants
pub async fn create_tenant(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<TenantRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TenantResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    let created = state
        .tenants
        .create(payload.into())
        .await
        .map_err(domain_error_response)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(created.into()))))
}

/// GET /api/tenants
pub async fn get_all_tenants(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<ApiResponse<Vec<TenantResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let tenants = state.tenants.get_all().await.map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        tenants.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/tenants/property/{property_id}
pub async fn get_tenants_by_property(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(property_id): Path<EntityId>,
) -> Result<Json<ApiResponse<Vec<TenantResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let tenants = state
        .tenants
        .get_by_property(property_id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        tenants.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/tenants/{id}
pub async fn get_tenant_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<EntityId>,
) -> Result<Json<ApiResponse<TenantResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let tenant = state.tenants.get_by_id(id).await.map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(tenant.into())))
}

/// PUT /api/tenants/{id}
pub async fn update_tenant(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<EntityId>,
    Json(payload): Json<TenantRequest>,
) -> Result<Json<ApiResponse<TenantResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let updated = state
        .tenants
        .update(id, payload.into())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(updated.into())))
}

/// DELETE /api/tenants/{id}
pub async fn delete_tenant(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<()>>)> {
    state.tenants.delete(id).await.map_err(domain_error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
