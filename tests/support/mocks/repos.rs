// tests/support/mocks/repos.rs
//
// In-memory repositories backing the service-level tests. State lives in
// a Mutex'd BTreeMap so iteration order matches insertion (ids ascend
// with creation time in every test).
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tinta_core::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use tinta_core::domain::errors::{DomainError, DomainResult};
use tinta_core::domain::like::{Like, LikeId, LikeRepository};
use tinta_core::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostUpdate, PostWriteRepository, VisibilityScope,
};
use tinta_core::domain::user::{Email, NewUser, User, UserId, UserRepository, UserUpdate};

#[derive(Clone, Default)]
pub struct InMemoryUserRepo {
    inner: Arc<Mutex<UserStore>>,
}

#[derive(Default)]
struct UserStore {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

impl InMemoryUserRepo {
    pub fn get(&self, id: UserId) -> Option<User> {
        self.inner.lock().unwrap().users.get(&i64::from(id)).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut store = self.inner.lock().unwrap();
        if store
            .users
            .values()
            .any(|u| u.email.as_str() == new_user.email.as_str())
        {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        store.next_id += 1;
        let user = User {
            id: UserId::new(store.next_id).expect("positive id"),
            email: new_user.email,
            password_hash: new_user.password_hash,
            first_name: new_user.first_name,
            role: new_user.role,
            team: new_user.team,
            is_superuser: new_user.is_superuser,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
            updated_at: new_user.updated_at,
        };
        let id = store.next_id;
        store.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut store = self.inner.lock().unwrap();
        let user = store
            .users
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(team) = update.team {
            user.team = team;
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .users
            .values()
            .find(|u| u.email.as_str() == email.as_str())
            .cloned())
    }

    async fn list_page(&self, offset: u64, limit: u64) -> DomainResult<(Vec<User>, u64)> {
        let store = self.inner.lock().unwrap();
        let total = store.users.len() as u64;
        let page = store
            .users
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((page, total))
    }

    async fn soft_delete(&self, id: UserId, now: DateTime<Utc>) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        let user = store
            .users
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.is_active = false;
        user.updated_at = now;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryPostRepo {
    inner: Arc<Mutex<PostStore>>,
}

#[derive(Default)]
struct PostStore {
    posts: BTreeMap<i64, Post>,
    next_id: i64,
}

impl InMemoryPostRepo {
    pub fn get(&self, id: PostId) -> Option<Post> {
        self.inner.lock().unwrap().posts.get(&i64::from(id)).cloned()
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut store = self.inner.lock().unwrap();
        if store
            .posts
            .values()
            .any(|p| p.title.as_str() == post.title.as_str())
        {
            return Err(DomainError::Conflict("title already exists".into()));
        }
        store.next_id += 1;
        let post = Post {
            id: PostId::new(store.next_id).expect("positive id"),
            author_id: post.author_id,
            author_team: post.author_team,
            title: post.title,
            content: post.content,
            read_permission: post.read_permission,
            edit_permission: post.edit_permission,
            is_active: true,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        let id = store.next_id;
        store.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut store = self.inner.lock().unwrap();
        let post = store
            .posts
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(level) = update.read_permission {
            post.read_permission = level;
        }
        if let Some(level) = update.edit_permission {
            post.edit_permission = level;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn soft_delete(&self, id: PostId, now: DateTime<Utc>) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        let post = store
            .posts
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        post.is_active = false;
        post.updated_at = now;
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.get(id))
    }

    async fn list_page(
        &self,
        scope: &VisibilityScope,
        offset: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let store = self.inner.lock().unwrap();
        let matching: Vec<Post> = store
            .posts
            .values()
            .filter(|p| scope.matches(p))
            .cloned()
            .collect();
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCommentRepo {
    inner: Arc<Mutex<CommentStore>>,
}

#[derive(Default)]
struct CommentStore {
    comments: BTreeMap<i64, Comment>,
    next_id: i64,
}

impl InMemoryCommentRepo {
    pub fn get(&self, id: CommentId) -> Option<Comment> {
        self.inner
            .lock()
            .unwrap()
            .comments
            .get(&i64::from(id))
            .cloned()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let comment = Comment {
            id: CommentId::new(store.next_id).expect("positive id"),
            post_id: comment.post_id,
            user_id: comment.user_id,
            content: comment.content,
            is_active: true,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        };
        let id = store.next_id;
        store.comments.insert(id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.get(id))
    }

    async fn list_for_post(
        &self,
        post_id: PostId,
        offset: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Comment>, u64)> {
        let store = self.inner.lock().unwrap();
        let matching: Vec<Comment> = store
            .comments
            .values()
            .filter(|c| c.post_id == post_id && c.is_active)
            .cloned()
            .collect();
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn soft_delete(&self, id: CommentId, now: DateTime<Utc>) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        let comment = store
            .comments
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.is_active = false;
        comment.updated_at = now;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryLikeRepo {
    inner: Arc<Mutex<LikeStore>>,
}

#[derive(Default)]
struct LikeStore {
    likes: BTreeMap<i64, Like>,
    next_id: i64,
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepo {
    async fn toggle(
        &self,
        post_id: PostId,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<Like> {
        let mut store = self.inner.lock().unwrap();
        if let Some(like) = store
            .likes
            .values_mut()
            .find(|l| l.post_id == post_id && l.user_id == user_id)
        {
            like.is_active = !like.is_active;
            like.updated_at = now;
            return Ok(like.clone());
        }
        store.next_id += 1;
        let like = Like {
            id: LikeId::new(store.next_id).expect("positive id"),
            post_id,
            user_id,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let id = store.next_id;
        store.likes.insert(id, like.clone());
        Ok(like)
    }

    async fn list_for_post(
        &self,
        post_id: PostId,
        offset: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Like>, u64)> {
        let store = self.inner.lock().unwrap();
        let matching: Vec<Like> = store
            .likes
            .values()
            .filter(|l| l.post_id == post_id && l.is_active)
            .cloned()
            .collect();
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }
}
