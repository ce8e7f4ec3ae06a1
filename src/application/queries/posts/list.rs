// src/application/queries/posts/list.rs
use super::{PostQueryService, service::POSTS_PAGE_SIZE};
use crate::{
    application::{
        dto::{
            Page, PostDto,
            pagination::{PageParams, page_offset},
        },
        error::ApplicationResult,
    },
    domain::{
        post::{AccessVerb, listing_scope},
        user::Identity,
    },
};

pub struct ListPostsQuery {
    pub params: PageParams,
}

impl PostQueryService {
    pub async fn list_posts(
        &self,
        identity: &Identity,
        query: ListPostsQuery,
    ) -> ApplicationResult<Page<PostDto>> {
        let scope = listing_scope(identity, AccessVerb::Read);
        let page = query.params.page;
        let page_size = query.params.effective_size(POSTS_PAGE_SIZE);

        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let (posts, total_count) = self.post_read.list_page(&scope, offset, page_size).await?;
        page_offset(page, page_size, total_count)?;

        Ok(Page::from_parts(
            posts.into_iter().map(Into::into).collect(),
            page,
            page_size,
            total_count,
        ))
    }
}
