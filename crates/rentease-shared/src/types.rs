//! Common types

/// Database-assigned numeric identifier shared by all entities.
pub type EntityId = i64;
