// src/application/commands/users/mod.rs
mod access;
mod create;
mod delete;
mod login;
mod service;
mod update;

pub(crate) use access::ensure_superuser;
pub use create::CreateUserCommand;
pub use delete::DeleteUserCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
