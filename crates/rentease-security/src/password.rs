//! Password hashing with Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

use rentease_shared::config::PasswordSettings;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Invalid hash parameters: {0}")]
    InvalidParams(String),
    #[error("Hash error: {0}")]
    HashError(String),
}

/// Argon2id hasher with configurable cost. The cost parameters are encoded
/// into every digest, so digests created under older settings keep verifying
/// after the work factor is raised.
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    pub fn new(settings: &PasswordSettings) -> Result<Self, PasswordError> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash with a fresh random salt. Two calls with the same input produce
    /// different digests.
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    /// Verify against a stored digest. Cost parameters come from the digest
    /// itself, not from this service's configuration.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| PasswordError::HashError(e.to_string()))?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> PasswordSettings {
        PasswordSettings {
            memory_kib: 8192,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_is_salted_and_verifiable() {
        let passwords = PasswordService::new(&settings()).unwrap();

        let first = passwords.hash("s3cret-password").unwrap();
        let second = passwords.hash("s3cret-password").unwrap();

        assert_ne!(first, second);
        assert!(passwords.verify("s3cret-password", &first).unwrap());
        assert!(!passwords.verify("wrong-password", &first).unwrap());
    }

    #[test]
    fn test_digest_survives_cost_change() {
        let old = PasswordService::new(&settings()).unwrap();
        let digest = old.hash("s3cret-password").unwrap();

        let raised = PasswordService::new(&PasswordSettings {
            memory_kib: 19456,
            iterations: 2,
            parallelism: 1,
        })
        .unwrap();

        assert!(raised.verify("s3cret-password", &digest).unwrap());
    }

    #[test]
    fn test_garbage_digest_is_an_error() {
        let passwords = PasswordService::new(&settings()).unwrap();

        assert!(passwords.verify("s3cret-password", "not-a-phc-string").is_err());
    }
}
