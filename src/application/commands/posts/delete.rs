// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::post::AccessVerb,
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let post = self
            .fetch_visible(actor, command.id, AccessVerb::Write)
            .await?;

        self.post_write
            .soft_delete(post.id, self.clock.now())
            .await?;
        Ok(())
    }
}
