use crate::domain::errors::DomainResult;
use crate::domain::like::entity::Like;
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Create an active like if none exists for (post, user), otherwise
    /// flip the existing row's active flag. Implementations must be
    /// race-free for concurrent calls on the same pair.
    async fn toggle(&self, post_id: PostId, user_id: UserId, now: DateTime<Utc>)
    -> DomainResult<Like>;

    /// Active likes on a post, creation time ascending, with the total
    /// matching count.
    async fn list_for_post(
        &self,
        post_id: PostId,
        offset: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Like>, u64)>;
}
