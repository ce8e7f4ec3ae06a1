// src/application/queries/posts/retrieve.rs
use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::user::Identity,
};

pub struct RetrievePostQuery {
    pub id: i64,
}

impl PostQueryService {
    pub async fn retrieve_post(
        &self,
        identity: &Identity,
        query: RetrievePostQuery,
    ) -> ApplicationResult<PostDto> {
        let post = self.fetch_readable(identity, query.id).await?;
        Ok(post.into())
    }
}
