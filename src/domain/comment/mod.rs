// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Comment, CommentContent, CommentId, NewComment};
pub use repository::CommentRepository;
