//! # RentEase Shared
//!
//! Shared configuration, telemetry, types, and constants for the RentEase backend.

pub mod config;
pub mod constants;
pub mod telemetry;
pub mod types;

pub use types::EntityId;
