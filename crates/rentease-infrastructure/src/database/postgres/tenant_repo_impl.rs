// ============================================================================
// RentEase Infrastructure - PostgreSQL Tenant Repository
// File: crates/rentease-infrastructure/src/database/postgres/tenant_repo_impl.rs
// ============================================================================
//! PostgreSQL tenant repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use rentease_core::domain::{NewTenant, Tenant, TenantWithProperty};
use rentease_core::error::DomainError;
use rentease_core::repositories::TenantRepository;
use rentease_shared::EntityId;

pub struct PgTenantRepository {
    pool: PgPool,
}

impl PgTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping; property_title comes from the join.
#[derive(Debug, FromRow)]
struct TenantRow {
    id: EntityId,
    name: String,
    email: String,
    phone: String,
    property_id: EntityId,
    created_at: DateTime<Utc>,
    property_title: String,
}

impl From<TenantRow> for TenantWithProperty {
    fn from(row: TenantRow) -> Self {
        TenantWithProperty {
            tenant: Tenant {
                id: row.id,
                name: row.name,
                email: row.email,
                phone: row.phone,
                property_id: row.property_id,
                created_at: row.created_at,
            },
            property_title: row.property_title,
        }
    }
}

#[async_trait]
impl TenantRepository for PgTenantRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<TenantWithProperty>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.name, t.email, t.phone, t.property_id, t.created_at,
                   p.title AS property_title
            FROM tenants t
            JOIN properties p ON p.id = t.property_id
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding tenant by id: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<TenantWithProperty>, DomainError> {
        let rows: Vec<TenantRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.name, t.email, t.phone, t.property_id, t.created_at,
                   p.title AS property_title
            FROM tenants t
            JOIN properties p ON p.id = t.property_id
            ORDER BY t.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing tenants: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_property(&self, property_id: EntityId) -> Result<Vec<TenantWithProperty>, DomainError> {
        let rows: Vec<TenantRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.name, t.email, t.phone, t.property_id, t.created_at,
                   p.title AS property_title
            FROM tenants t
            JOIN properties p ON p.id = t.property_id
            WHERE t.property_id = $1
            ORDER BY t.id
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing tenants by property: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn exists_by_id(&self, id: EntityId) -> Result<bool, DomainError> {
        sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM tenants WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error checking tenant existence: {}", e);
            DomainError::Database(e.to_string())
        })
    }

    async fn create(&self, tenant: &NewTenant) -> Result<TenantWithProperty, DomainError> {
        info!("Creating tenant for property: {}", tenant.property_id);

        let row: TenantRow = sqlx::query_as(
            r#"
            WITH inserted AS (
                INSERT INTO tenants (name, email, phone, property_id, created_at)
                VALUES ($1, $2, $3, $4, NOW())
                RETURNING id, name, email, phone, property_id, created_at
            )
            SELECT i.id, i.name, i.email, i.phone, i.property_id, i.created_at,
                   p.title AS property_title
            FROM inserted i
            JOIN properties p ON p.id = i.property_id
            "#,
        )
        .bind(&tenant.name)
        .bind(&tenant.email)
        .bind(&tenant.phone)
        .bind(tenant.property_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating tenant: {}", e);
            if e.as_database_error().is_some_and(|d| d.is_foreign_key_violation()) {
                DomainError::PropertyNotFound(tenant.property_id)
            } else {
                DomainError::Database(e.to_string())
            }
        })?;

        info!("Tenant created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, tenant: &Tenant) -> Result<TenantWithProperty, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            WITH updated AS (
                UPDATE tenants
                SET name = $2, email = $3, phone = $4, property_id = $5
                WHERE id = $1
                RETURNING id, name, email, phone, property_id, created_at
            )
            SELECT i.id, i.name, i.email, i.phone, i.property_id, i.created_at,
                   p.title AS property_title
            FROM updated i
            JOIN properties p ON p.id = i.property_id
            "#,
        )
        .bind(tenant.id)
        .bind(&tenant.name)
        .bind(&tenant.email)
        .bind(&tenant.phone)
        .bind(tenant.property_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating tenant: {}", e);
            if e.as_database_error().is_some_and(|d| d.is_foreign_key_violation()) {
                DomainError::PropertyNotFound(tenant.property_id)
            } else {
                DomainError::Database(e.to_string())
            }
        })?;

        row.map(|r| r.into())
            .ok_or(DomainError::TenantNotFound(tenant.id))
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tenants WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting tenant: {}", e);
            DomainError::Database(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TenantNotFound(id));
        }
        Ok(())
    }
}
