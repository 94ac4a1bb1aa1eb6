//! Tenant service: CRUD with the Tenant -> Property integrity check

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::{NewTenant, Tenant, TenantInput, TenantWithProperty};
use crate::error::DomainError;
use crate::repositories::{PropertyRepository, TenantRepository};
use rentease_shared::EntityId;

pub struct TenantService<T: TenantRepository, P: PropertyRepository> {
    tenant_repo: Arc<T>,
    property_repo: Arc<P>,
}

impl<T: TenantRepository, P: PropertyRepository> TenantService<T, P> {
    pub fn new(tenant_repo: Arc<T>, property_repo: Arc<P>) -> Self {
        Self {
            tenant_repo,
            property_repo,
        }
    }

    /// Create a tenant. The referenced property must exist.
    pub async fn create(&self, input: TenantInput) -> Result<TenantWithProperty, DomainError> {
        let input = input.trimmed();
        input.validate()?;

        if !self.property_repo.exists_by_id(input.property_id).await? {
            return Err(DomainError::PropertyNotFound(input.property_id));
        }

        let created = self
            .tenant_repo
            .create(&NewTenant {
                name: input.name,
                email: input.email,
                phone: input.phone,
                property_id: input.property_id,
            })
            .await?;

        info!(
            "Tenant created: {} (property: {})",
            created.tenant.id, created.tenant.property_id
        );
        Ok(created)
    }

    pub async fn get_all(&self) -> Result<Vec<TenantWithProperty>, DomainError> {
        self.tenant_repo.find_all().await
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<TenantWithProperty, DomainError> {
        self.tenant_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TenantNotFound(id))
    }

    pub async fn get_by_property(
        &self,
        property_id: EntityId,
    ) -> Result<Vec<TenantWithProperty>, DomainError> {
        self.tenant_repo.find_by_property(property_id).await
    }

    /// Overwrite name, email, phone, and the property reference. Unlike
    /// properties, tenants may be moved to another (existing) property.
    pub async fn update(&self, id: EntityId, input: TenantInput) -> Result<TenantWithProperty, DomainError> {
        let input = input.trimmed();
        input.validate()?;

        let existing = self
            .tenant_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TenantNotFound(id))?;

        if !self.property_repo.exists_by_id(input.property_id).await? {
            return Err(DomainError::PropertyNotFound(input.property_id));
        }

        self.tenant_repo
            .update(&Tenant {
                id,
                name: input.name,
                email: input.email,
                phone: input.phone,
                property_id: input.property_id,
                created_at: existing.tenant.created_at,
            })
            .await
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        if !self.tenant_repo.exists_by_id(id).await? {
            return Err(DomainError::TenantNotFound(id));
        }
        self.tenant_repo.delete(id).await?;
        info!("Tenant deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockPropertyRepository, MockTenantRepository};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn input(property_id: i64) -> TenantInput {
        TenantInput {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            property_id,
        }
    }

    fn view(id: i64, property_id: i64) -> TenantWithProperty {
        TenantWithProperty {
            tenant: Tenant {
                id,
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                property_id,
                created_at: Utc::now(),
            },
            property_title: "Flat A".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_with_absent_property_persists_nothing() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_exists_by_id().with(eq(99)).returning(|_| Ok(false));
        let tenants = MockTenantRepository::new();
        // No expect_create: an insert would panic the mock.

        let service = TenantService::new(Arc::new(tenants), Arc::new(properties));

        let err = service.create(input(99)).await.unwrap_err();

        assert!(matches!(err, DomainError::PropertyNotFound(99)));
    }

    #[tokio::test]
    async fn test_create_persists_against_existing_property() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_exists_by_id().with(eq(10)).returning(|_| Ok(true));
        let mut tenants = MockTenantRepository::new();
        tenants.expect_create().returning(|t| {
            assert_eq!(t.property_id, 10);
            Ok(view(5, t.property_id))
        });

        let service = TenantService::new(Arc::new(tenants), Arc::new(properties));

        let created = service.create(input(10)).await.unwrap();

        assert_eq!(created.tenant.property_id, 10);
        assert_eq!(created.property_title, "Flat A");
    }

    #[tokio::test]
    async fn test_update_checks_the_new_property_reference() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_exists_by_id().with(eq(11)).returning(|_| Ok(false));
        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .with(eq(5))
            .returning(|_| Ok(Some(view(5, 10))));

        let service = TenantService::new(Arc::new(tenants), Arc::new(properties));

        let err = service.update(5, input(11)).await.unwrap_err();

        assert!(matches!(err, DomainError::PropertyNotFound(11)));
    }

    #[tokio::test]
    async fn test_update_reassigns_property() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_exists_by_id().with(eq(11)).returning(|_| Ok(true));
        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .with(eq(5))
            .returning(|_| Ok(Some(view(5, 10))));
        tenants.expect_update().returning(|t| {
            assert_eq!(t.property_id, 11);
            Ok(view(t.id, t.property_id))
        });

        let service = TenantService::new(Arc::new(tenants), Arc::new(properties));

        let updated = service.update(5, input(11)).await.unwrap();

        assert_eq!(updated.tenant.property_id, 11);
    }

    #[tokio::test]
    async fn test_delete_missing_tenant_fails() {
        let mut tenants = MockTenantRepository::new();
        tenants.expect_exists_by_id().returning(|_| Ok(false));

        let service = TenantService::new(Arc::new(tenants), Arc::new(MockPropertyRepository::new()));

        let err = service.delete(5).await.unwrap_err();

        assert!(matches!(err, DomainError::TenantNotFound(5)));
    }
}
