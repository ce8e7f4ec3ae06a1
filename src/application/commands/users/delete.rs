// src/application/commands/users/delete.rs
use super::{UserCommandService, access::ensure_superuser};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct DeleteUserCommand {
    pub id: i64,
}

impl UserCommandService {
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteUserCommand,
    ) -> ApplicationResult<()> {
        ensure_superuser(actor)?;

        let id = UserId::new(command.id)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        self.user_repo
            .soft_delete(user.id, self.clock.now())
            .await?;
        Ok(())
    }
}
