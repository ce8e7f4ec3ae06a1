// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PermissionLevel, PostContent, PostId, PostTitle};
use crate::domain::user::{Team, UserId};
use chrono::{DateTime, Utc};

/// A post as read from storage. `author_team` is joined from the author's
/// account so the visibility policy can evaluate team matches without a
/// second lookup.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub author_team: Team,
    pub title: PostTitle,
    pub content: PostContent,
    pub read_permission: PermissionLevel,
    pub edit_permission: PermissionLevel,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn set_content(&mut self, title: PostTitle, content: PostContent, now: DateTime<Utc>) {
        self.title = title;
        self.content = content;
        self.updated_at = now;
    }

    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: UserId,
    pub author_team: Team,
    pub title: PostTitle,
    pub content: PostContent,
    pub read_permission: PermissionLevel,
    pub edit_permission: PermissionLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub content: Option<PostContent>,
    pub read_permission: Option<PermissionLevel>,
    pub edit_permission: Option<PermissionLevel>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            read_permission: None,
            edit_permission: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_read_permission(mut self, level: PermissionLevel) -> Self {
        self.read_permission = Some(level);
        self
    }

    pub fn with_edit_permission(mut self, level: PermissionLevel) -> Self {
        self.edit_permission = Some(level);
        self
    }
}
