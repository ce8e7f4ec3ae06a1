// src/application/commands/users/create.rs
use super::{UserCommandService, access::ensure_superuser};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Role, Team},
};

pub struct CreateUserCommand {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub role: Option<Role>,
    pub team: Option<String>,
}

impl UserCommandService {
    pub async fn create_user(
        &self,
        actor: &AuthenticatedUser,
        command: CreateUserCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_superuser(actor)?;

        let role = command.role.unwrap_or_default();
        let team = Team::new(command.team.unwrap_or_default());

        // Field checks first, then the cross-field invariant; every
        // violation is reported in one response.
        let mut violations = Vec::new();
        if command.email.trim().is_empty() {
            violations.push("Email address field may not be blank.".to_owned());
        }
        if command.password.trim().is_empty() {
            violations.push("Password field may not be blank.".to_owned());
        }
        if role == Role::Blogger && team.is_empty() {
            violations.push("Bloggers must belong to one team.".to_owned());
        }
        if !violations.is_empty() {
            return Err(ApplicationError::validation_all(violations));
        }

        let email = Email::new(command.email)?;
        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let first_name = command.first_name.filter(|name| !name.trim().is_empty());
        let new_user = NewUser::new(email, password_hash, role, team, self.clock.now())?
            .with_first_name(first_name);

        let created = self.user_repo.insert(new_user).await?;
        Ok(created.into())
    }
}
