//! Tenant domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use rentease_shared::EntityId;

/// Occupant of a property. The property reference must resolve at every
/// write, and may be reassigned on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_id: EntityId,
    pub created_at: DateTime<Utc>,
}

/// Read model: tenant joined with its property's title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantWithProperty {
    #[serde(flatten)]
    pub tenant: Tenant,
    pub property_title: String,
}

/// Mutable fields accepted on create and update.
#[derive(Debug, Clone, Validate)]
pub struct TenantInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    pub phone: String,

    pub property_id: EntityId,
}

impl TenantInput {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            property_id: self.property_id,
        }
    }
}

/// Insert payload; the database assigns the id.
#[derive(Debug, Clone)]
pub struct NewTenant {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        let input = TenantInput {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            property_id: 1,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let input = TenantInput {
            name: "Jane Doe".to_string(),
            email: "not-an-email".to_string(),
            phone: "555-0100".to_string(),
            property_id: 1,
        };
        assert!(input.validate().is_err());
    }
}
