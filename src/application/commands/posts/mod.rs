// src/application/commands/posts/mod.rs
mod comment;
mod create;
mod delete;
mod like;
mod service;
mod update;

pub use comment::{CreateCommentCommand, DeleteCommentCommand};
pub use create::CreatePostCommand;
pub use delete::DeletePostCommand;
pub use like::ToggleLikeCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
