// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    AccessVerb, NewPost, PermissionLevel, Post, PostContent, PostId, PostReadRepository,
    PostTitle, PostUpdate, PostWriteRepository, VisibilityScope,
};
use crate::domain::user::{Team, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    author_id: i64,
    author_team: String,
    title: String,
    content: String,
    read_permission: String,
    edit_permission: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            author_team: Team::new(row.author_team),
            title: PostTitle::new(row.title)?,
            content: PostContent::new(row.content)?,
            read_permission: row.read_permission.parse()?,
            edit_permission: row.edit_permission.parse()?,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const POST_COLUMNS: &str = "p.id, p.author_id, u.team AS author_team, p.title, p.content, \
     p.read_permission, p.edit_permission, p.is_active, p.created_at, p.updated_at";

/// Append the WHERE clause for a visibility scope. Mirrors
/// `VisibilityScope::matches` exactly; both must change together.
fn push_scope(builder: &mut QueryBuilder<'_, Postgres>, scope: &VisibilityScope) {
    builder.push(" WHERE p.is_active");
    match scope {
        VisibilityScope::ActiveOnly => {}
        VisibilityScope::PublicOnly => {
            builder.push(" AND p.read_permission = ");
            builder.push_bind(PermissionLevel::Public.as_str());
        }
        VisibilityScope::Scoped { viewer, team, verb } => {
            let column = match verb {
                AccessVerb::Read => "p.read_permission",
                AccessVerb::Write => "p.edit_permission",
            };
            builder.push(format!(" AND ({column} IN ('public', 'authenticated')"));
            builder.push(" OR p.author_id = ");
            builder.push_bind(i64::from(*viewer));
            builder.push(" OR u.team = ");
            builder.push_bind(team.as_str().to_owned());
            builder.push(")");
        }
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            author_id,
            author_team,
            title,
            content,
            read_permission,
            edit_permission,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "WITH inserted AS (
                 INSERT INTO posts (author_id, title, content, read_permission, edit_permission,
                                    is_active, created_at, updated_at)
                 VALUES ($1, $2, $3, $4, $5, TRUE, $6, $7)
                 RETURNING *
             )
             SELECT p.id, p.author_id, u.team AS author_team, p.title, p.content,
                    p.read_permission, p.edit_permission, p.is_active, p.created_at, p.updated_at
             FROM inserted p JOIN users u ON u.id = p.author_id",
        )
        .bind(i64::from(author_id))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(read_permission.as_str())
        .bind(edit_permission.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        // author_team travels on NewPost for in-memory implementations;
        // the SQL join is authoritative here.
        let _ = author_team;
        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            content,
            read_permission,
            edit_permission,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(String::from(content));
        }
        if let Some(level) = read_permission {
            builder.push(", read_permission = ");
            builder.push_bind(level.as_str());
        }
        if let Some(level) = edit_permission {
            builder.push(", edit_permission = ");
            builder.push_bind(level.as_str());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id WHERE p.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn soft_delete(&self, id: PostId, now: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query("UPDATE posts SET is_active = FALSE, updated_at = $1 WHERE id = $2")
            .bind(now)
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id WHERE p.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_page(
        &self,
        scope: &VisibilityScope,
        offset: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let mut count_builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT COUNT(*) FROM posts p JOIN users u ON u.id = p.author_id",
        );
        push_scope(&mut count_builder, scope);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id"
        ));
        push_scope(&mut builder, scope);
        builder.push(" ORDER BY p.created_at ASC LIMIT ");
        builder.push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let rows: Vec<PostRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((posts, total.max(0) as u64))
    }
}
