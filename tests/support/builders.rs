// tests/support/builders.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use tinta_core::application::dto::AuthenticatedUser;
use tinta_core::domain::post::{NewPost, PermissionLevel, PostContent, PostTitle};
use tinta_core::domain::user::{Email, NewUser, PasswordHash, Role, Team, UserId};

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn actor(id: i64, role: Role, team: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        email: format!("user{id}@example.com"),
        role,
        team: Team::new(team),
        is_superuser: false,
        issued_at: epoch(),
        expires_at: epoch() + Duration::hours(1),
    }
}

pub fn blogger(id: i64, team: &str) -> AuthenticatedUser {
    actor(id, Role::Blogger, team)
}

pub fn admin(id: i64) -> AuthenticatedUser {
    actor(id, Role::Admin, "")
}

pub fn superuser(id: i64) -> AuthenticatedUser {
    let mut user = actor(id, Role::Admin, "");
    user.is_superuser = true;
    user
}

pub fn new_user(email: &str, role: Role, team: &str) -> NewUser {
    NewUser::new(
        Email::new(email).unwrap(),
        PasswordHash::new("hashed:secret").unwrap(),
        role,
        Team::new(team),
        epoch(),
    )
    .unwrap()
}

pub fn new_post(author: &AuthenticatedUser, title: &str, read: PermissionLevel, edit: PermissionLevel) -> NewPost {
    NewPost {
        author_id: author.id,
        author_team: author.team.clone(),
        title: PostTitle::new(title).unwrap(),
        content: PostContent::new("content").unwrap(),
        read_permission: read,
        edit_permission: edit,
        created_at: epoch(),
        updated_at: epoch(),
    }
}
