// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::{Role, Team, UserId};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::{sync::Arc, time::Duration};

type HmacSha256 = Hmac<Sha256>;

/// Bearer tokens as `base64url(claims).base64url(hmac)` over a shared
/// secret. Claims are a flat JSON object; the signature covers the raw
/// claims bytes.
#[derive(Clone)]
pub struct HmacTokenManager {
    secret: Vec<u8>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    uid: i64,
    email: String,
    role: Role,
    team: String,
    su: bool,
    iat: i64,
    exp: i64,
}

impl HmacTokenManager {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.len() < 32 {
            return Err(ApplicationError::infrastructure(
                "token secret must be at least 32 bytes",
            ));
        }
        Ok(Self {
            secret: secret.as_bytes().to_vec(),
            ttl,
            clock,
        })
    }

    fn mac(&self, payload: &[u8]) -> ApplicationResult<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(payload);
        Ok(mac)
    }
}

#[async_trait]
impl TokenManager for HmacTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at
            + chrono::Duration::from_std(self.ttl)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let claims = Claims {
            uid: subject.user_id.into(),
            email: subject.email,
            role: subject.role,
            team: subject.team.into(),
            su: subject.is_superuser,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let payload = serde_json::to_vec(&claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let signature = self.mac(&payload)?.finalize().into_bytes();

        let token = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(signature)
        );

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: (expires_at - issued_at).num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (payload_part, signature_part) = token
            .split_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_part)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_part)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;

        self.mac(&payload)?
            .verify_slice(&signature)
            .map_err(|_| ApplicationError::unauthorized("invalid token signature"))?;

        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;

        let now = self.clock.now();
        if claims.exp < now.timestamp() {
            return Err(ApplicationError::unauthorized("token expired"));
        }

        let issued_at = chrono::DateTime::from_timestamp(claims.iat, 0)
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;
        let expires_at = chrono::DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;

        Ok(AuthenticatedUser {
            id: UserId::new(claims.uid)?,
            email: claims.email,
            role: claims.role,
            team: Team::new(claims.team),
            is_superuser: claims.su,
            issued_at,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::time::SystemClock;
    use crate::domain::user::Role;

    fn manager() -> HmacTokenManager {
        HmacTokenManager::new(
            "0123456789abcdef0123456789abcdef",
            Duration::from_secs(3600),
            Arc::new(SystemClock),
        )
        .unwrap()
    }

    fn subject() -> TokenSubject {
        TokenSubject {
            user_id: UserId::new(7).unwrap(),
            email: "ada@team.io".into(),
            role: Role::Blogger,
            team: Team::new("backend"),
            is_superuser: false,
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates() {
        let manager = manager();
        let token = manager.issue(subject()).await.unwrap();
        let user = manager.authenticate(&token.token).await.unwrap();
        assert_eq!(i64::from(user.id), 7);
        assert_eq!(user.email, "ada@team.io");
        assert_eq!(user.role, Role::Blogger);
        assert_eq!(user.team.as_str(), "backend");
        assert!(!user.is_superuser);
    }

    #[tokio::test]
    async fn tampered_payload_is_rejected() {
        let manager = manager();
        let token = manager.issue(subject()).await.unwrap().token;
        let (_, signature) = token.split_once('.').unwrap();
        let forged_claims = URL_SAFE_NO_PAD.encode(
            br#"{"uid":7,"email":"ada@team.io","role":"admin","team":"backend","su":true,"iat":0,"exp":9999999999}"#,
        );
        let forged = format!("{forged_claims}.{signature}");
        assert!(manager.authenticate(&forged).await.is_err());
    }

    #[tokio::test]
    async fn rejects_short_secret() {
        assert!(
            HmacTokenManager::new("short", Duration::from_secs(60), Arc::new(SystemClock))
                .is_err()
        );
    }
}
