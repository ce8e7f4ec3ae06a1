// tests/support/mocks/security.rs
use async_trait::async_trait;
use tinta_core::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use tinta_core::application::error::{ApplicationError, ApplicationResult};
use tinta_core::application::ports::security::{PasswordHasher, TokenManager};

pub struct MockPasswordHasher;

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hashed:{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct MockTokenManager;

#[async_trait]
impl TokenManager for MockTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = chrono::Utc::now();
        let expires_at = issued_at + chrono::Duration::hours(1);
        Ok(AuthTokenDto {
            token: format!("token-for-{}", i64::from(subject.user_id)),
            issued_at,
            expires_at,
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, _token: &str) -> ApplicationResult<AuthenticatedUser> {
        Err(ApplicationError::unauthorized("not supported in tests"))
    }
}
