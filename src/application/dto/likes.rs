use crate::domain::like::Like;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikeDto {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Like> for LikeDto {
    fn from(like: Like) -> Self {
        Self {
            id: like.id.into(),
            post_id: like.post_id.into(),
            user_id: like.user_id.into(),
            is_active: like.is_active,
            created_at: like.created_at,
            updated_at: like.updated_at,
        }
    }
}
