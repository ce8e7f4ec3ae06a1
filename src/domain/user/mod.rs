// src/domain/user/mod.rs
pub mod entity;
pub mod identity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, User, UserUpdate};
pub use identity::Identity;
pub use repository::UserRepository;
pub use value_objects::{Email, PasswordHash, Role, Team, UserId};
