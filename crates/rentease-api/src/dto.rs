//! Request and response DTOs
//!
//! Wire format is camelCase, matching the existing API clients.

use serde::{Deserialize, Serialize};

use rentease_core::domain::{PropertyInput, PropertyWithOwner, TenantInput, TenantWithProperty};
use rentease_core::services::AuthSession;
use rentease_shared::EntityId;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Identical shape for register and login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub message: String,
    pub user_id: EntityId,
    pub name: String,
    pub email: String,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            message: session.message,
            user_id: session.user_id,
            name: session.name,
            email: session.email,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRequest {
    pub title: String,
    pub address: String,
    pub rent_amount: f64,
}

impl From<PropertyRequest> for PropertyInput {
    fn from(request: PropertyRequest) -> Self {
        Self {
            title: request.title,
            address: request.address,
            rent_amount: request.rent_amount,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    pub id: EntityId,
    pub title: String,
    pub address: String,
    pub rent_amount: f64,
    pub owner_id: EntityId,
    pub owner_name: String,
}

impl From<PropertyWithOwner> for PropertyResponse {
    fn from(view: PropertyWithOwner) -> Self {
        Self {
            id: view.property.id,
            title: view.property.title,
            address: view.property.address,
            rent_amount: view.property.rent_amount,
            owner_id: view.property.owner_id,
            owner_name: view.owner_name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_id: EntityId,
}

impl From<TenantRequest> for TenantInput {
    fn from(request: TenantRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            property_id: request.property_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantResponse {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_id: EntityId,
    pub property_title: String,
}

impl From<TenantWithProperty> for TenantResponse {
    fn from(view: TenantWithProperty) -> Self {
        Self {
            id: view.tenant.id,
            name: view.tenant.name,
            email: view.tenant.email,
            phone: view.tenant.phone,
            property_id: view.tenant.property_id,
            property_title: view.property_title,
        }
    }
}
