// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::post::{AccessVerb, PermissionLevel, PostContent, PostTitle, PostUpdate},
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub read_permission: Option<PermissionLevel>,
    pub edit_permission: Option<PermissionLevel>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let post = self
            .fetch_visible(actor, command.id, AccessVerb::Write)
            .await?;

        let mut update = PostUpdate::new(post.id, self.clock.now());

        // Partial update: an omitted or blank field keeps the stored
        // value, never becomes empty.
        if let Some(title) = non_blank(command.title) {
            update = update.with_title(PostTitle::new(title)?);
        }
        if let Some(content) = non_blank(command.content) {
            update = update.with_content(PostContent::new(content)?);
        }
        if let Some(level) = command.read_permission {
            update = update.with_read_permission(level);
        }
        if let Some(level) = command.edit_permission {
            update = update.with_edit_permission(level);
        }

        let updated = self.post_write.update(update).await?;
        Ok(updated.into())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
