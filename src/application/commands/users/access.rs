// src/application/commands/users/access.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

/// Account management is gated on the superuser flag, which is a separate
/// axis from the admin role.
pub(crate) fn ensure_superuser(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.is_superuser {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "superuser privileges are required",
        ))
    }
}
