// src/application/commands/users/update.rs
use super::{UserCommandService, access::ensure_superuser};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, PasswordHash, Role, Team, UserId, UserUpdate},
};

pub struct UpdateUserCommand {
    pub id: i64,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub role: Option<Role>,
    pub team: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_superuser(actor)?;

        let id = UserId::new(command.id)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let effective_role = command.role.unwrap_or(user.role);
        let effective_team = match &command.team {
            Some(team) => Team::new(team.clone()),
            // Promoting a blogger to admin without naming a team clears
            // the label; any other omission keeps the stored one.
            None if user.role == Role::Blogger && effective_role == Role::Admin => Team::empty(),
            None => user.team.clone(),
        };

        if effective_role == Role::Blogger && effective_team.is_empty() {
            return Err(ApplicationError::validation(
                "Bloggers must belong to one team.",
            ));
        }

        let mut update = UserUpdate::new(id, self.clock.now())
            .with_role(effective_role)
            .with_team(effective_team);

        if let Some(email) = non_blank(command.email) {
            update = update.with_email(Email::new(email)?);
        }
        if let Some(password) = non_blank(command.password) {
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }
        if let Some(first_name) = non_blank(command.first_name) {
            update = update.with_first_name(Some(first_name));
        }

        let updated = self.user_repo.update(update).await?;
        Ok(updated.into())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
