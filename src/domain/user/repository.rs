use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User, UserUpdate};
use crate::domain::user::value_objects::{Email, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    /// Lookup by id, soft-deleted accounts included.
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// Accounts ordered by creation time ascending, soft-deleted included.
    async fn list_page(&self, offset: u64, limit: u64) -> DomainResult<(Vec<User>, u64)>;

    async fn soft_delete(&self, id: UserId, now: DateTime<Utc>) -> DomainResult<()>;
}
