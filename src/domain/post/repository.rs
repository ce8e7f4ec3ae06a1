use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::policy::VisibilityScope;
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn soft_delete(&self, id: PostId, now: DateTime<Utc>) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    /// Lookup by id, soft-deleted rows included. Visibility is the
    /// caller's concern.
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;

    /// Posts admitted by `scope`, ordered by creation time ascending,
    /// together with the total matching count.
    async fn list_page(
        &self,
        scope: &VisibilityScope,
        offset: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Post>, u64)>;
}
