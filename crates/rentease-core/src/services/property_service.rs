//! Property service: owner-scoped CRUD with referential checks

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::{NewProperty, Property, PropertyInput, PropertyWithOwner};
use crate::error::DomainError;
use crate::repositories::{PropertyRepository, UserRepository};
use rentease_shared::EntityId;

pub struct PropertyService<P: PropertyRepository, U: UserRepository> {
    property_repo: Arc<P>,
    user_repo: Arc<U>,
}

impl<P: PropertyRepository, U: UserRepository> PropertyService<P, U> {
    pub fn new(property_repo: Arc<P>, user_repo: Arc<U>) -> Self {
        Self {
            property_repo,
            user_repo,
        }
    }

    /// Create a property for the authenticated owner. The owner must exist
    /// and stays fixed for the property's lifetime.
    pub async fn create(
        &self,
        input: PropertyInput,
        owner_id: EntityId,
    ) -> Result<PropertyWithOwner, DomainError> {
        let input = input.trimmed();
        input.validate()?;

        let owner = self
            .user_repo
            .find_by_id(owner_id)
            .await?
            .ok_or(DomainError::UserNotFound(owner_id))?;

        let created = self
            .property_repo
            .create(&NewProperty {
                title: input.title,
                address: input.address,
                rent_amount: input.rent_amount,
                owner_id: owner.id,
            })
            .await?;

        info!("Property created: {} (owner: {})", created.property.id, owner.id);
        Ok(created)
    }

    pub async fn get_all(&self) -> Result<Vec<PropertyWithOwner>, DomainError> {
        self.property_repo.find_all().await
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<PropertyWithOwner, DomainError> {
        self.property_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PropertyNotFound(id))
    }

    pub async fn get_by_owner(&self, owner_id: EntityId) -> Result<Vec<PropertyWithOwner>, DomainError> {
        self.property_repo.find_by_owner(owner_id).await
    }

    /// Overwrite title, address, and rent amount. The owner reference never
    /// changes on update.
    pub async fn update(
        &self,
        id: EntityId,
        input: PropertyInput,
    ) -> Result<PropertyWithOwner, DomainError> {
        let input = input.trimmed();
        input.validate()?;

        let existing = self
            .property_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PropertyNotFound(id))?;

        self.property_repo
            .update(&Property {
                id,
                title: input.title,
                address: input.address,
                rent_amount: input.rent_amount,
                owner_id: existing.property.owner_id,
                created_at: existing.property.created_at,
            })
            .await
    }

    /// Remove a property. Fails while tenants still reference it.
    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        if !self.property_repo.exists_by_id(id).await? {
            return Err(DomainError::PropertyNotFound(id));
        }
        self.property_repo.delete(id).await?;
        info!("Property deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, User};
    use crate::repositories::{MockPropertyRepository, MockUserRepository};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn input(title: &str, rent: f64) -> PropertyInput {
        PropertyInput {
            title: title.to_string(),
            address: "1 Main St".to_string(),
            rent_amount: rent,
        }
    }

    fn owner(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("owner{}@example.com", id),
            password_hash: "$argon2id$stub".to_string(),
            role: Role::Owner,
            created_at: Utc::now(),
        }
    }

    fn view(id: i64, title: &str, rent: f64, owner_id: i64, owner_name: &str) -> PropertyWithOwner {
        PropertyWithOwner {
            property: Property {
                id,
                title: title.to_string(),
                address: "1 Main St".to_string(),
                rent_amount: rent,
                owner_id,
                created_at: Utc::now(),
            },
            owner_name: owner_name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_resolves_owner_and_persists() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_create().returning(|p| {
            assert_eq!(p.owner_id, 3);
            Ok(view(10, &p.title, p.rent_amount, p.owner_id, "Alice Owner"))
        });
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(owner(id, "Alice Owner"))));

        let service = PropertyService::new(Arc::new(properties), Arc::new(users));

        let created = service.create(input("Flat A", 500.0), 3).await.unwrap();

        assert_eq!(created.property.title, "Flat A");
        assert_eq!(created.property.owner_id, 3);
        assert_eq!(created.owner_name, "Alice Owner");
    }

    #[tokio::test]
    async fn test_create_with_absent_owner_persists_nothing() {
        let properties = MockPropertyRepository::new();
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let service = PropertyService::new(Arc::new(properties), Arc::new(users));

        let err = service.create(input("Flat A", 500.0), 99).await.unwrap_err();

        assert!(matches!(err, DomainError::UserNotFound(99)));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let service = PropertyService::new(
            Arc::new(MockPropertyRepository::new()),
            Arc::new(MockUserRepository::new()),
        );

        let zero_rent = service.create(input("Flat A", 0.0), 3).await.unwrap_err();
        let blank_title = service.create(input("   ", 500.0), 3).await.unwrap_err();

        assert!(matches!(zero_rent, DomainError::Validation(_)));
        assert!(matches!(blank_title, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_keeps_owner_fixed() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_by_id()
            .with(eq(10))
            .returning(|_| Ok(Some(view(10, "Flat A", 500.0, 3, "Alice Owner"))));
        properties.expect_update().returning(|p| {
            assert_eq!(p.owner_id, 3);
            assert_eq!(p.rent_amount, 650.0);
            Ok(view(p.id, &p.title, p.rent_amount, p.owner_id, "Alice Owner"))
        });

        let service = PropertyService::new(Arc::new(properties), Arc::new(MockUserRepository::new()));

        let updated = service.update(10, input("Flat A", 650.0)).await.unwrap();

        assert_eq!(updated.property.rent_amount, 650.0);
        assert_eq!(updated.property.owner_id, 3);
    }

    #[tokio::test]
    async fn test_update_missing_property_fails() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_by_id().returning(|_| Ok(None));

        let service = PropertyService::new(Arc::new(properties), Arc::new(MockUserRepository::new()));

        let err = service.update(10, input("Flat A", 650.0)).await.unwrap_err();

        assert!(matches!(err, DomainError::PropertyNotFound(10)));
    }

    #[tokio::test]
    async fn test_delete_missing_property_fails() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_exists_by_id().returning(|_| Ok(false));

        let service = PropertyService::new(Arc::new(properties), Arc::new(MockUserRepository::new()));

        let err = service.delete(10).await.unwrap_err();

        assert!(matches!(err, DomainError::PropertyNotFound(10)));
    }

    #[tokio::test]
    async fn test_get_by_owner_returns_owner_scoped_rows() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_by_owner().with(eq(3)).returning(|_| {
            Ok(vec![
                view(10, "Flat A", 500.0, 3, "Alice Owner"),
                view(12, "Flat C", 720.0, 3, "Alice Owner"),
            ])
        });

        let service = PropertyService::new(Arc::new(properties), Arc::new(MockUserRepository::new()));

        let mine = service.get_by_owner(3).await.unwrap();

        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|p| p.property.owner_id == 3));
    }
}
