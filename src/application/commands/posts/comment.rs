// src/application/commands/posts/comment.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentContent, CommentId, NewComment},
        post::AccessVerb,
        user::Role,
    },
};

pub struct CreateCommentCommand {
    pub post_id: i64,
    pub content: String,
}

pub struct DeleteCommentCommand {
    pub post_id: i64,
    pub comment_id: i64,
}

impl PostCommandService {
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let post = self
            .fetch_visible(actor, command.post_id, AccessVerb::Read)
            .await?;

        let mut violations = Vec::new();
        if command.content.trim().is_empty() {
            violations.push("Comments must have content.".to_owned());
        }
        if !violations.is_empty() {
            return Err(ApplicationError::validation_all(violations));
        }

        let now = self.clock.now();
        let comment = NewComment {
            post_id: post.id,
            user_id: actor.id,
            content: CommentContent::new(command.content)?,
            created_at: now,
            updated_at: now,
        };

        let created = self.comment_repo.insert(comment).await?;
        Ok(created.into())
    }

    /// Admins may delete any comment on a post they can read; bloggers
    /// only their own. A comment outside those bounds reports `NotFound`.
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let post = self
            .fetch_visible(actor, command.post_id, AccessVerb::Read)
            .await?;

        let comment_id = CommentId::new(command.comment_id)?;
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .filter(|comment| comment.post_id == post.id)
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        if actor.role != Role::Admin && comment.user_id != actor.id {
            return Err(ApplicationError::not_found("comment not found"));
        }

        self.comment_repo
            .soft_delete(comment.id, self.clock.now())
            .await?;
        Ok(())
    }
}
