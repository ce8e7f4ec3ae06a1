// src/application/queries/posts/children.rs
//
// Comment and like listings inherit visibility from the parent post's
// read check; the children carry no permissions of their own.
use super::{
    PostQueryService,
    service::{COMMENTS_PAGE_SIZE, LIKES_PAGE_SIZE},
};
use crate::{
    application::{
        dto::{
            CommentDto, LikeDto, Page,
            pagination::{PageParams, page_offset},
        },
        error::ApplicationResult,
    },
    domain::user::Identity,
};

pub struct ListCommentsQuery {
    pub post_id: i64,
    pub params: PageParams,
}

pub struct ListLikesQuery {
    pub post_id: i64,
    pub params: PageParams,
}

impl PostQueryService {
    pub async fn list_comments(
        &self,
        identity: &Identity,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Page<CommentDto>> {
        let post = self.fetch_readable(identity, query.post_id).await?;

        let page = query.params.page;
        let page_size = query.params.effective_size(COMMENTS_PAGE_SIZE);
        let offset = page.saturating_sub(1).saturating_mul(page_size);

        let (comments, total_count) = self
            .comment_repo
            .list_for_post(post.id, offset, page_size)
            .await?;
        page_offset(page, page_size, total_count)?;

        Ok(Page::from_parts(
            comments.into_iter().map(Into::into).collect(),
            page,
            page_size,
            total_count,
        ))
    }

    pub async fn list_likes(
        &self,
        identity: &Identity,
        query: ListLikesQuery,
    ) -> ApplicationResult<Page<LikeDto>> {
        let post = self.fetch_readable(identity, query.post_id).await?;

        let page = query.params.page;
        let page_size = query.params.effective_size(LIKES_PAGE_SIZE);
        let offset = page.saturating_sub(1).saturating_mul(page_size);

        let (likes, total_count) = self
            .like_repo
            .list_for_post(post.id, offset, page_size)
            .await?;
        page_offset(page, page_size, total_count)?;

        Ok(Page::from_parts(
            likes.into_iter().map(Into::into).collect(),
            page,
            page_size,
            total_count,
        ))
    }
}
