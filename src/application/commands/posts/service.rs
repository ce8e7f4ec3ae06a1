// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::CommentRepository,
        like::LikeRepository,
        post::{AccessVerb, Post, PostId, PostReadRepository, PostWriteRepository, post_visible},
    },
};

pub struct PostCommandService {
    pub(super) post_write: Arc<dyn PostWriteRepository>,
    pub(super) post_read: Arc<dyn PostReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) like_repo: Arc<dyn LikeRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        post_write: Arc<dyn PostWriteRepository>,
        post_read: Arc<dyn PostReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            post_write,
            post_read,
            comment_repo,
            like_repo,
            clock,
        }
    }

    /// Fetch a post and run it through the visibility predicate. An
    /// existing-but-invisible post reports the same `NotFound` as an
    /// absent one, so callers cannot probe for hidden rows.
    pub(super) async fn fetch_visible(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        verb: AccessVerb,
    ) -> ApplicationResult<Post> {
        let id = PostId::new(id)?;
        let post = self
            .post_read
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !post_visible(&actor.identity(), verb, &post) {
            return Err(ApplicationError::not_found("post not found"));
        }

        Ok(post)
    }
}
