//! Application-wide constants

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_TOKEN_EXPIRY: i64 = 86400;
pub const BEARER_PREFIX: &str = "Bearer ";
