// src/domain/like/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LikeId(pub i64);

impl LikeId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("like id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<LikeId> for i64 {
    fn from(value: LikeId) -> Self {
        value.0
    }
}

/// A like is a toggle, not a log: at most one row exists per
/// (post, user) pair and repeated calls flip `is_active`.
#[derive(Debug, Clone)]
pub struct Like {
    pub id: LikeId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
