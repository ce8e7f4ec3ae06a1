// src/application/queries/posts/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        comment::CommentRepository,
        like::LikeRepository,
        post::{AccessVerb, Post, PostId, PostReadRepository, post_visible},
        user::Identity,
    },
};

pub const POSTS_PAGE_SIZE: u64 = 10;
pub const COMMENTS_PAGE_SIZE: u64 = 10;
pub const LIKES_PAGE_SIZE: u64 = 20;

pub struct PostQueryService {
    pub(super) post_read: Arc<dyn PostReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) like_repo: Arc<dyn LikeRepository>,
}

impl PostQueryService {
    pub fn new(
        post_read: Arc<dyn PostReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            post_read,
            comment_repo,
            like_repo,
        }
    }

    pub(super) async fn fetch_readable(
        &self,
        identity: &Identity,
        id: i64,
    ) -> ApplicationResult<Post> {
        let id = PostId::new(id)?;
        let post = self
            .post_read
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !post_visible(identity, AccessVerb::Read, &post) {
            return Err(ApplicationError::not_found("post not found"));
        }

        Ok(post)
    }
}
