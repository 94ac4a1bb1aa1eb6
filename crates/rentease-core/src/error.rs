//! Domain errors

use thiserror::Error;

use rentease_shared::EntityId;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found with id: {0}")]
    UserNotFound(EntityId),

    #[error("Property not found with id: {0}")]
    PropertyNotFound(EntityId),

    #[error("Tenant not found with id: {0}")]
    TenantNotFound(EntityId),

    #[error("User with email {0} already exists")]
    EmailAlreadyExists(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Property {0} still has tenants assigned")]
    PropertyHasTenants(EntityId),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Token generation error: {0}")]
    TokenGeneration(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::Validation(errors.to_string())
    }
}
