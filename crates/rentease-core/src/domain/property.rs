//! Property domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use rentease_shared::EntityId;

/// Rental property. The owner reference is fixed at creation; updates never
/// move a property to another owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: EntityId,
    pub title: String,
    pub address: String,
    pub rent_amount: f64,
    pub owner_id: EntityId,
    pub created_at: DateTime<Utc>,
}

/// Read model: property joined with its owner's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyWithOwner {
    #[serde(flatten)]
    pub property: Property,
    pub owner_name: String,
}

/// Mutable fields accepted on create and update.
#[derive(Debug, Clone, Validate)]
pub struct PropertyInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[validate(range(exclusive_min = 0.0, message = "Rent amount must be greater than 0"))]
    pub rent_amount: f64,
}

impl PropertyInput {
    /// Strip surrounding whitespace so blank-only fields fail validation.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            address: self.address.trim().to_string(),
            rent_amount: self.rent_amount,
        }
    }
}

/// Insert payload; the database assigns the id.
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub title: String,
    pub address: String,
    pub rent_amount: f64,
    pub owner_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        let input = PropertyInput {
            title: "Flat A".to_string(),
            address: "1 Main St".to_string(),
            rent_amount: 500.0,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_zero_rent_is_rejected() {
        let input = PropertyInput {
            title: "Flat A".to_string(),
            address: "1 Main St".to_string(),
            rent_amount: 0.0,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_blank_title_is_rejected_after_trim() {
        let input = PropertyInput {
            title: "   ".to_string(),
            address: "1 Main St".to_string(),
            rent_amount: 500.0,
        }
        .trimmed();
        assert!(input.validate().is_err());
    }
}
