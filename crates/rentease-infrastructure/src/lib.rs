//! # RentEase Infrastructure
//!
//! PostgreSQL implementations of the repository ports (adapters).

pub mod database;

pub use database::{create_pool, run_migrations, PgPropertyRepository, PgTenantRepository, PgUserRepository};
