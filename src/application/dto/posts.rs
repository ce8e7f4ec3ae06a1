use crate::domain::post::{PermissionLevel, Post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub read_permission: PermissionLevel,
    pub edit_permission: PermissionLevel,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            author_id: post.author_id.into(),
            title: post.title.into(),
            content: post.content.into(),
            read_permission: post.read_permission,
            edit_permission: post.edit_permission,
            is_active: post.is_active,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
