// ============================================================================
// RentEase Core - Authentication Service
// File: crates/rentease-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service: registration, login, token issuance

use std::sync::Arc;

use tracing::{info, warn};
use validator::ValidateEmail;

use crate::domain::{NewUser, Role};
use crate::error::DomainError;
use crate::repositories::UserRepository;
use rentease_security::{PasswordService, TokenService};
use rentease_shared::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use rentease_shared::EntityId;

/// Authentication service for handling register/login flows
pub struct AuthService<R: UserRepository> {
    user_repo: Arc<R>,
    tokens: Arc<TokenService>,
    passwords: Arc<PasswordService>,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(user_repo: Arc<R>, tokens: Arc<TokenService>, passwords: Arc<PasswordService>) -> Self {
        Self {
            user_repo,
            tokens,
            passwords,
        }
    }

    /// Register a new owner account and issue its first token.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, DomainError> {
        info!("Registration attempt for email: {}", email);

        let name = name.trim();
        let email = email.trim();

        // 1. Precondition checks
        if name.is_empty() {
            return Err(DomainError::Validation("Name is required".to_string()));
        }
        if !email.validate_email() {
            return Err(DomainError::Validation("A valid email is required".to_string()));
        }
        if password.len() < MIN_PASSWORD_LENGTH || password.len() > MAX_PASSWORD_LENGTH {
            return Err(DomainError::Validation(format!(
                "Password must be between {} and {} characters",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            )));
        }

        // 2. Email uniqueness (case-insensitive)
        if self.user_repo.exists_by_email(email).await? {
            warn!("Registration failed: email already exists: {}", email);
            return Err(DomainError::EmailAlreadyExists(email.to_string()));
        }

        // 3. Hash password
        let password_hash = self
            .passwords
            .hash(password)
            .map_err(|e| DomainError::PasswordHash(e.to_string()))?;

        // 4. Persist with the only role the system ever assigns
        let user = self
            .user_repo
            .create(&NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role: Role::Owner,
            })
            .await?;

        // 5. Issue token bound to the new user
        let token = self
            .tokens
            .issue(&user.email, user.id)
            .map_err(|e| DomainError::TokenGeneration(e.to_string()))?;

        info!("Registration successful for: {}", email);

        Ok(AuthSession {
            token,
            message: "User registered successfully".to_string(),
            user_id: user.id,
            name: user.name,
            email: user.email,
        })
    }

    /// Login with email and password.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        info!("Login attempt for email: {}", email);

        let user = self
            .user_repo
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email: {}", email);
                DomainError::InvalidCredentials
            })?;

        let password_valid = self
            .passwords
            .verify(password, &user.password_hash)
            .map_err(|_| DomainError::InvalidCredentials)?;

        if !password_valid {
            warn!("Login failed: invalid password for: {}", email);
            return Err(DomainError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&user.email, user.id)
            .map_err(|e| DomainError::TokenGeneration(e.to_string()))?;

        info!("Login successful for: {}", email);

        Ok(AuthSession {
            token,
            message: "Login successful".to_string(),
            user_id: user.id,
            name: user.name,
            email: user.email,
        })
    }
}

/// Result of a successful register or login; the shape is identical for both.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub message: String,
    pub user_id: EntityId,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::repositories::MockUserRepository;
    use chrono::Utc;
    use rentease_shared::config::PasswordSettings;

    const SECRET: &str = "test-secret-key-minimum-32-characters-long";

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new(SECRET.to_string(), 3600))
    }

    fn passwords() -> Arc<PasswordService> {
        Arc::new(
            PasswordService::new(&PasswordSettings {
                memory_kib: 8192,
                iterations: 1,
                parallelism: 1,
            })
            .unwrap(),
        )
    }

    fn stored_user(id: i64, email: &str, password_hash: String) -> User {
        User {
            id,
            name: "Alice Owner".to_string(),
            email: email.to_string(),
            password_hash,
            role: Role::Owner,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_issues_token_bound_to_new_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_email()
            .withf(|email| email == "alice@example.com")
            .returning(|_| Ok(false));
        repo.expect_create().returning(|user| {
            assert_eq!(user.role, Role::Owner);
            assert!(!user.password_hash.contains("s3cret-password"));
            Ok(User {
                id: 7,
                name: user.name.clone(),
                email: user.email.clone(),
                password_hash: user.password_hash.clone(),
                role: user.role,
                created_at: Utc::now(),
            })
        });

        let tokens = tokens();
        let service = AuthService::new(Arc::new(repo), tokens.clone(), passwords());

        let session = service
            .register("Alice Owner", "alice@example.com", "s3cret-password")
            .await
            .unwrap();

        assert_eq!(session.user_id, 7);
        assert_eq!(session.email, "alice@example.com");
        // The embedded userId claim resolves to the persisted id.
        let claims = tokens.verify(&session.token).unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.sub, "alice@example.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_creates_nothing() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_email().returning(|_| Ok(true));
        // No expect_create: a second insert would panic the mock.

        let service = AuthService::new(Arc::new(repo), tokens(), passwords());

        let err = service
            .register("Alice Owner", "alice@example.com", "s3cret-password")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_input() {
        let repo = MockUserRepository::new();
        let service = AuthService::new(Arc::new(repo), tokens(), passwords());

        let blank_name = service.register("  ", "a@example.com", "s3cret-password").await;
        let bad_email = service.register("Alice", "not-an-email", "s3cret-password").await;
        let short_password = service.register("Alice", "a@example.com", "short").await;

        assert!(matches!(blank_name.unwrap_err(), DomainError::Validation(_)));
        assert!(matches!(bad_email.unwrap_err(), DomainError::Validation(_)));
        assert!(matches!(short_password.unwrap_err(), DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_login_success_returns_fresh_token() {
        let passwords = passwords();
        let hash = passwords.hash("s3cret-password").unwrap();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .returning(move |_| Ok(Some(stored_user(7, "alice@example.com", hash.clone()))));

        let tokens = tokens();
        let service = AuthService::new(Arc::new(repo), tokens.clone(), passwords);

        let session = service.login("alice@example.com", "s3cret-password").await.unwrap();

        assert_eq!(session.user_id, 7);
        assert_eq!(tokens.verify(&session.token).unwrap().user_id, 7);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let passwords = passwords();
        let hash = passwords.hash("s3cret-password").unwrap();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "unknown@example.com")
            .returning(|_| Ok(None));
        repo.expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .returning(move |_| Ok(Some(stored_user(7, "alice@example.com", hash.clone()))));

        let service = AuthService::new(Arc::new(repo), tokens(), passwords);

        let unknown = service
            .login("unknown@example.com", "s3cret-password")
            .await
            .unwrap_err();
        let wrong = service
            .login("alice@example.com", "wrong-password")
            .await
            .unwrap_err();

        assert!(matches!(unknown, DomainError::InvalidCredentials));
        assert!(matches!(wrong, DomainError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }
}
