//! PostgreSQL repository implementations

pub mod property_repo_impl;
pub mod tenant_repo_impl;
pub mod user_repo_impl;

pub use property_repo_impl::PgPropertyRepository;
pub use tenant_repo_impl::PgTenantRepository;
pub use user_repo_impl::PgUserRepository;
