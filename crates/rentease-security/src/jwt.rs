//! JWT token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rentease_shared::EntityId;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum JwtError {
    #[error("Token creation failed: {0}")]
    Creation(String),
    #[error("Malformed token")]
    Malformed,
    #[error("Token expired")]
    Expired,
    #[error("Token signature mismatch")]
    InvalidSignature,
    #[error("Unknown claim: {0}")]
    UnknownClaim(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(rename = "userId")]
    pub user_id: EntityId,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies stateless, self-contained session tokens. The signing
/// secret and expiry window are fixed at startup.
pub struct TokenService {
    secret: String,
    token_expiry: i64,
}

impl TokenService {
    pub fn new(secret: String, token_expiry: i64) -> Self {
        Self { secret, token_expiry }
    }

    /// Issue a signed token carrying the subject (email) and userId claims.
    pub fn issue(&self, subject: &str, user_id: EntityId) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            user_id,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| JwtError::Creation(e.to_string()))
    }

    /// Check signature and expiry, returning the embedded claims.
    ///
    /// Malformed, expired, and tampered tokens fail with distinct errors so
    /// the HTTP boundary can report them separately.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => JwtError::Expired,
            ErrorKind::InvalidSignature => JwtError::InvalidSignature,
            _ => JwtError::Malformed,
        })
    }

    /// Return a single named claim from a verified token.
    pub fn extract_claim(&self, token: &str, name: &str) -> Result<serde_json::Value, JwtError> {
        let claims = self.verify(token)?;
        let value = serde_json::to_value(&claims)
            .map_err(|e| JwtError::Creation(e.to_string()))?;
        value
            .get(name)
            .cloned()
            .ok_or_else(|| JwtError::UnknownClaim(name.to_string()))
    }

    pub fn extract_user_id(&self, token: &str) -> Result<EntityId, JwtError> {
        Ok(self.verify(token)?.user_id)
    }
}
