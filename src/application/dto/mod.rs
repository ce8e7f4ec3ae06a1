pub mod auth;
pub mod comments;
pub mod likes;
pub mod pagination;
pub mod posts;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use comments::CommentDto;
pub use likes::LikeDto;
pub use pagination::{Page, PageParams};
pub use posts::PostDto;
pub use users::UserDto;
