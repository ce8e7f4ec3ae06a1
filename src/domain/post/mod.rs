// src/domain/post/mod.rs
pub mod entity;
pub mod policy;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate};
pub use policy::{AccessVerb, VisibilityScope, listing_scope, post_visible};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{PermissionLevel, PostContent, PostId, PostTitle};
