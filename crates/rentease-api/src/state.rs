use std::sync::Arc;

use axum::extract::FromRef;

use rentease_core::services::{AuthService, PropertyService, TenantService};
use rentease_infrastructure::{PgPropertyRepository, PgTenantRepository, PgUserRepository};
use rentease_security::TokenService;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub auth: Arc<AuthService<PgUserRepository>>,
    pub properties: Arc<PropertyService<PgPropertyRepository, PgUserRepository>>,
    pub tenants: Arc<TenantService<PgTenantRepository, PgPropertyRepository>>,
    pub tokens: Arc<TokenService>,
}
