// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{NewPost, PermissionLevel, PostContent, PostTitle, value_objects},
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub read_permission: Option<PermissionLevel>,
    pub edit_permission: Option<PermissionLevel>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let mut violations = Vec::new();
        if command.title.trim().is_empty() {
            violations.push("Post must have a title.".to_owned());
        } else if command.title.chars().count() > value_objects::MAX_TITLE_LENGTH {
            violations.push(format!(
                "Post title cannot exceed {} characters.",
                value_objects::MAX_TITLE_LENGTH
            ));
        }
        if command.content.trim().is_empty() {
            violations.push("Post must have content.".to_owned());
        }
        if !violations.is_empty() {
            return Err(ApplicationError::validation_all(violations));
        }

        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let now = self.clock.now();

        let new_post = NewPost {
            author_id: actor.id,
            author_team: actor.team.clone(),
            title,
            content,
            read_permission: command.read_permission.unwrap_or_default(),
            edit_permission: command.edit_permission.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let created = self.post_write.insert(new_post).await?;
        Ok(created.into())
    }
}
