// src/application/commands/posts/like.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, LikeDto},
        error::ApplicationResult,
    },
    domain::post::AccessVerb,
};

pub struct ToggleLikeCommand {
    pub post_id: i64,
}

impl PostCommandService {
    /// First call creates an active like; every later call by the same
    /// account on the same post flips it. Liking requires read access to
    /// the post, not edit access.
    pub async fn toggle_like(
        &self,
        actor: &AuthenticatedUser,
        command: ToggleLikeCommand,
    ) -> ApplicationResult<LikeDto> {
        let post = self
            .fetch_visible(actor, command.post_id, AccessVerb::Read)
            .await?;

        let like = self
            .like_repo
            .toggle(post.id, actor.id, self.clock.now())
            .await?;
        Ok(like.into())
    }
}
