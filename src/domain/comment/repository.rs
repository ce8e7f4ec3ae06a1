use crate::domain::comment::entity::{Comment, CommentId, NewComment};
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Lookup by id, soft-deleted rows included.
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    /// Active comments on a post, creation time ascending, with the total
    /// matching count.
    async fn list_for_post(
        &self,
        post_id: PostId,
        offset: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Comment>, u64)>;

    async fn soft_delete(&self, id: CommentId, now: DateTime<Utc>) -> DomainResult<()>;
}
