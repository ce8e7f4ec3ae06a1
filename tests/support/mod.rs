// tests/support/mod.rs
#![allow(dead_code)]

pub mod builders;
pub mod mocks;

use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tinta_core::application::dto::TokenSubject;
use tinta_core::application::ports::security::TokenManager as _;
use tinta_core::application::services::ApplicationServices;
use tinta_core::domain::user::{PasswordHash, Role, User, UserId, UserRepository};
use tinta_core::infrastructure::security::token::HmacTokenManager;
use tinta_core::presentation::http::{routes::build_router, state::HttpState};

use self::builders::epoch;
use self::mocks::repos::{InMemoryCommentRepo, InMemoryLikeRepo, InMemoryPostRepo, InMemoryUserRepo};
use self::mocks::security::MockPasswordHasher;
use self::mocks::time::FixedClock;

pub const TEST_SECRET: &str = "test-secret-test-secret-test-secret!";

/// Full application wired over in-memory repositories, a deterministic
/// clock and a mock password hasher. Tokens are real so the HTTP
/// extractors exercise the same path as production.
pub struct TestHarness {
    pub users: InMemoryUserRepo,
    pub posts: InMemoryPostRepo,
    pub comments: InMemoryCommentRepo,
    pub likes: InMemoryLikeRepo,
    pub clock: Arc<FixedClock>,
    pub services: Arc<ApplicationServices>,
}

impl TestHarness {
    pub fn new() -> Self {
        let users = InMemoryUserRepo::default();
        let posts = InMemoryPostRepo::default();
        let comments = InMemoryCommentRepo::default();
        let likes = InMemoryLikeRepo::default();
        let clock = Arc::new(FixedClock::at(epoch()));

        let token_manager = HmacTokenManager::new(
            TEST_SECRET,
            Duration::from_secs(3600),
            Arc::clone(&clock) as Arc<dyn tinta_core::application::ports::time::Clock>,
        )
        .expect("valid test secret");

        let services = Arc::new(ApplicationServices::new(
            Arc::new(users.clone()),
            Arc::new(posts.clone()),
            Arc::new(posts.clone()),
            Arc::new(comments.clone()),
            Arc::new(likes.clone()),
            Arc::new(MockPasswordHasher),
            Arc::new(token_manager),
            Arc::clone(&clock) as Arc<dyn tinta_core::application::ports::time::Clock>,
        ));

        Self {
            users,
            posts,
            comments,
            likes,
            clock,
            services,
        }
    }

    pub fn router(&self) -> Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
        })
    }

    /// Insert an account directly into the store. The password is
    /// "secret" under the mock hasher.
    pub async fn seed_user(&self, email: &str, role: Role, team: &str, superuser: bool) -> User {
        let mut new_user = builders::new_user(email, role, team);
        new_user.is_superuser = superuser;
        new_user.password_hash = PasswordHash::new("hashed:secret").unwrap();
        self.users.insert(new_user).await.expect("seed user")
    }

    pub async fn token_for(&self, user: &User) -> String {
        self.services
            .token_manager()
            .issue(TokenSubject::from_user(user))
            .await
            .expect("issue token")
            .token
    }

    pub fn user(&self, id: i64) -> Option<User> {
        self.users.get(UserId::new(id).unwrap())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

