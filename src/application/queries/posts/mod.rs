// src/application/queries/posts/mod.rs
mod children;
mod list;
mod retrieve;
mod service;

pub use children::{ListCommentsQuery, ListLikesQuery};
pub use list::ListPostsQuery;
pub use retrieve::RetrievePostQuery;
pub use service::PostQueryService;
