//! Request authentication

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header::AUTHORIZATION, request::Parts, StatusCode};
use axum::Json;

use crate::response::ApiResponse;
use rentease_security::jwt::JwtError;
use rentease_security::TokenService;
use rentease_shared::constants::BEARER_PREFIX;
use rentease_shared::EntityId;

/// Identity of the authenticated caller, extracted once at the boundary from
/// the `Authorization: Bearer <token>` header and passed into handlers as a
/// plain value.
#[derive(Debug)]
pub struct AuthUser(pub EntityId);

fn unauthorized(code: &str, message: &str) -> (StatusCode, Json<ApiResponse<()>>) {
    (StatusCode::UNAUTHORIZED, Json(ApiResponse::error(code, message)))
}

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<TokenService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiResponse<()>>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| unauthorized("INVALID_TOKEN", "Missing bearer token"))?;

        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or_else(|| unauthorized("INVALID_TOKEN", "Missing bearer token"))?;

        let tokens = Arc::<TokenService>::from_ref(state);
        match tokens.verify(token) {
            Ok(claims) => Ok(AuthUser(claims.user_id)),
            Err(JwtError::Expired) => Err(unauthorized("TOKEN_EXPIRED", "Token has expired")),
            Err(_) => Err(unauthorized("INVALID_TOKEN", "Invalid token")),
        }
    }
}
