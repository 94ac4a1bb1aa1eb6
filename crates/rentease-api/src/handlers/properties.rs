//! Property HTTP handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::dto::{PropertyRequest, PropertyResponse};
use crate::middleware::AuthUser;
use crate::response::{domain_error_response, ApiResponse};
use crate::state::AppState;
use rentease_shared::EntityId;

/// POST /api/properties — the authenticated caller becomes the owner.
pub async fn create_property(
    State(state): State<AppState>,
    AuthUser(owner_id): AuthUser,
    Json(payload): Json<PropertyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PropertyResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    let created = state
        .properties
        .create(payload.into(), owner_id)
        .await
        .map_err(domain_error_response)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(created.into()))))
}

/// GET /api/properties
pub async fn get_all_properties(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<ApiResponse<Vec<PropertyResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let properties = state.properties.get_all().await.map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        properties.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/properties/my-properties
pub async fn get_my_properties(
    State(state): State<AppState>,
    AuthUser(owner_id): AuthUser,
) -> Result<Json<ApiResponse<Vec<PropertyResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let properties = state
        .properties
        .get_by_owner(owner_id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        properties.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/properties/{id}
pub async fn get_property_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<EntityId>,
) -> Result<Json<ApiResponse<PropertyResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let property = state.properties.get_by_id(id).await.map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(property.into())))
}

/// PUT /api/properties/{id}
pub async fn update_property(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<EntityId>,
    Json(payload): Json<PropertyRequest>,
) -> Result<Json<ApiResponse<PropertyResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let updated = state
        .properties
        .update(id, payload.into())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(updated.into())))
}

/// DELETE /api/properties/{id}
pub async fn delete_property(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<()>>)> {
    state.properties.delete(id).await.map_err(domain_error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
