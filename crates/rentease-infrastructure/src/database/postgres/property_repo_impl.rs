// ============================================================================
// RentEase Infrastructure - PostgreSQL Property Repository
// File: crates/rentease-infrastructure/src/database/postgres/property_repo_impl.rs
// ============================================================================
//! PostgreSQL property repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use rentease_core::domain::{NewProperty, Property, PropertyWithOwner};
use rentease_core::error::DomainError;
use rentease_core::repositories::PropertyRepository;
use rentease_shared::EntityId;

pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping; owner_name comes from the users join.
#[derive(Debug, FromRow)]
struct PropertyRow {
    id: EntityId,
    title: String,
    address: String,
    rent_amount: f64,
    owner_id: EntityId,
    created_at: DateTime<Utc>,
    owner_name: String,
}

impl From<PropertyRow> for PropertyWithOwner {
    fn from(row: PropertyRow) -> Self {
        PropertyWithOwner {
            property: Property {
                id: row.id,
                title: row.title,
                address: row.address,
                rent_amount: row.rent_amount,
                owner_id: row.owner_id,
                created_at: row.created_at,
            },
            owner_name: row.owner_name,
        }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<PropertyWithOwner>, DomainError> {
        let row: Option<PropertyRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.title, p.address, p.rent_amount, p.owner_id, p.created_at,
                   u.name AS owner_name
            FROM properties p
            JOIN users u ON u.id = p.owner_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding property by id: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<PropertyWithOwner>, DomainError> {
        let rows: Vec<PropertyRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.title, p.address, p.rent_amount, p.owner_id, p.created_at,
                   u.name AS owner_name
            FROM properties p
            JOIN users u ON u.id = p.owner_id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing properties: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_owner(&self, owner_id: EntityId) -> Result<Vec<PropertyWithOwner>, DomainError> {
        let rows: Vec<PropertyRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.title, p.address, p.rent_amount, p.owner_id, p.created_at,
                   u.name AS owner_name
            FROM properties p
            JOIN users u ON u.id = p.owner_id
            WHERE p.owner_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing properties by owner: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn exists_by_id(&self, id: EntityId) -> Result<bool, DomainError> {
        sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM properties WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error checking property existence: {}", e);
            DomainError::Database(e.to_string())
        })
    }

    async fn create(&self, property: &NewProperty) -> Result<PropertyWithOwner, DomainError> {
        info!("Creating property for owner: {}", property.owner_id);

        let row: PropertyRow = sqlx::query_as(
            r#"
            WITH inserted AS (
                INSERT INTO properties (title, address, rent_amount, owner_id, created_at)
                VALUES ($1, $2, $3, $4, NOW())
                RETURNING id, title, address, rent_amount, owner_id, created_at
            )
            SELECT i.id, i.title, i.address, i.rent_amount, i.owner_id, i.created_at,
                   u.name AS owner_name
            FROM inserted i
            JOIN users u ON u.id = i.owner_id
            "#,
        )
        .bind(&property.title)
        .bind(&property.address)
        .bind(property.rent_amount)
        .bind(property.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating property: {}", e);
            if e.as_database_error().is_some_and(|d| d.is_foreign_key_violation()) {
                DomainError::UserNotFound(property.owner_id)
            } else {
                DomainError::Database(e.to_string())
            }
        })?;

        info!("Property created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, property: &Property) -> Result<PropertyWithOwner, DomainError> {
        // The owner column is deliberately absent from the SET list.
        let row: Option<PropertyRow> = sqlx::query_as(
            r#"
            WITH updated AS (
                UPDATE properties
                SET title = $2, address = $3, rent_amount = $4
                WHERE id = $1
                RETURNING id, title, address, rent_amount, owner_id, created_at
            )
            SELECT i.id, i.title, i.address, i.rent_amount, i.owner_id, i.created_at,
                   u.name AS owner_name
            FROM updated i
            JOIN users u ON u.id = i.owner_id
            "#,
        )
        .bind(property.id)
        .bind(&property.title)
        .bind(&property.address)
        .bind(property.rent_amount)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating property: {}", e);
            DomainError::Database(e.to_string())
        })?;

        row.map(|r| r.into())
            .ok_or(DomainError::PropertyNotFound(property.id))
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM properties WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting property: {}", e);
            if e.as_database_error().is_some_and(|d| d.is_foreign_key_violation()) {
                DomainError::PropertyHasTenants(id)
            } else {
                DomainError::Database(e.to_string())
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PropertyNotFound(id));
        }
        Ok(())
    }
}
