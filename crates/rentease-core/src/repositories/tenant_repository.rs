//! Tenant repository trait (port)

use async_trait::async_trait;

use crate::domain::{NewTenant, Tenant, TenantWithProperty};
use crate::error::DomainError;
use rentease_shared::EntityId;

/// Reads return the property-joined view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<TenantWithProperty>, DomainError>;
    async fn find_all(&self) -> Result<Vec<TenantWithProperty>, DomainError>;
    async fn find_by_property(&self, property_id: EntityId) -> Result<Vec<TenantWithProperty>, DomainError>;
    async fn exists_by_id(&self, id: EntityId) -> Result<bool, DomainError>;
    async fn create(&self, tenant: &NewTenant) -> Result<TenantWithProperty, DomainError>;
    async fn update(&self, tenant: &Tenant) -> Result<TenantWithProperty, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
