//! Property repository trait (port)

use async_trait::async_trait;

use crate::domain::{NewProperty, Property, PropertyWithOwner};
use crate::error::DomainError;
use rentease_shared::EntityId;

/// Reads return the owner-joined view. `update` never touches the owner
/// column; `delete` fails while tenants still reference the property.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<PropertyWithOwner>, DomainError>;
    async fn find_all(&self) -> Result<Vec<PropertyWithOwner>, DomainError>;
    async fn find_by_owner(&self, owner_id: EntityId) -> Result<Vec<PropertyWithOwner>, DomainError>;
    async fn exists_by_id(&self, id: EntityId) -> Result<bool, DomainError>;
    async fn create(&self, property: &NewProperty) -> Result<PropertyWithOwner, DomainError>;
    async fn update(&self, property: &Property) -> Result<PropertyWithOwner, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
