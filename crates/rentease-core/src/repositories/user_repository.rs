//! User repository trait (port)

use async_trait::async_trait;

use crate::domain::{NewUser, User};
use crate::error::DomainError;
use rentease_shared::EntityId;

/// Email lookups are case-insensitive.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}
