// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_comment;
mod postgres_like;
mod postgres_post;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_like::PostgresLikeRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
pub use postgres_user::PostgresUserRepository;
