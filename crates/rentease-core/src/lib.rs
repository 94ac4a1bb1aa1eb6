//! # RentEase Core
//!
//! Domain entities, services, and repository ports for the RentEase backend.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub use domain::*;
pub use error::DomainError;
