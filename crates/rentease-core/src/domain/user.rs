//! User domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentease_shared::EntityId;

/// User role enumeration. Registration only ever assigns `Owner`; the variant
/// list is the extension point for future roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "owner" => Some(Role::Owner),
            _ => None,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Owner
    }
}

/// Identity record. Email and id are immutable once created; users are never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Insert payload; the database assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}
