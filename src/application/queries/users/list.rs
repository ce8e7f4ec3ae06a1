// src/application/queries/users/list.rs
use super::{UserQueryService, service::USERS_PAGE_SIZE};
use crate::application::{
    commands::users::ensure_superuser,
    dto::{
        AuthenticatedUser, Page, UserDto,
        pagination::{PageParams, page_offset},
    },
    error::ApplicationResult,
};

pub struct ListUsersQuery {
    pub params: PageParams,
}

impl UserQueryService {
    pub async fn list_users(
        &self,
        actor: &AuthenticatedUser,
        query: ListUsersQuery,
    ) -> ApplicationResult<Page<UserDto>> {
        ensure_superuser(actor)?;

        let page = query.params.page;
        let page_size = query.params.effective_size(USERS_PAGE_SIZE);
        let offset = page.saturating_sub(1).saturating_mul(page_size);

        let (users, total_count) = self.user_repo.list_page(offset, page_size).await?;
        page_offset(page, page_size, total_count)?;

        Ok(Page::from_parts(
            users.into_iter().map(Into::into).collect(),
            page,
            page_size,
            total_count,
        ))
    }
}
