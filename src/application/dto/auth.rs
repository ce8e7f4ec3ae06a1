use crate::domain::user::{Identity, Role, Team, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// The verified subject of a bearer token. `identity` bridges into the
/// domain policy layer.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub team: Team,
    pub is_superuser: bool,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn identity(&self) -> Identity {
        Identity::Authenticated {
            id: self.id,
            role: self.role,
            team: self.team.clone(),
            is_superuser: self.is_superuser,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
    pub team: Team,
    pub is_superuser: bool,
}

impl TokenSubject {
    pub fn from_user(user: &crate::domain::user::User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.to_string(),
            role: user.role,
            team: user.team.clone(),
            is_superuser: user.is_superuser,
        }
    }
}
