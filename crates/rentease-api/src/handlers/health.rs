//! Health check handler

use axum::Json;

use crate::response::ApiResponse;

/// GET /health
pub async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("ok"))
}
