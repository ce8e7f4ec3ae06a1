// src/infrastructure/repositories/postgres_like.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::like::{Like, LikeId, LikeRepository};
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LikeRow {
    id: i64,
    post_id: i64,
    user_id: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<LikeRow> for Like {
    type Error = DomainError;

    fn try_from(row: LikeRow) -> Result<Self, Self::Error> {
        Ok(Like {
            id: LikeId::new(row.id)?,
            post_id: PostId::new(row.post_id)?,
            user_id: UserId::new(row.user_id)?,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn toggle(
        &self,
        post_id: PostId,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<Like> {
        // Single-statement upsert: the (post_id, user_id) unique
        // constraint serializes concurrent toggles, so exactly one row
        // ever exists per pair and its final state reflects the number
        // of attempts.
        let row = sqlx::query_as::<_, LikeRow>(
            "INSERT INTO likes (post_id, user_id, is_active, created_at, updated_at)
             VALUES ($1, $2, TRUE, $3, $3)
             ON CONFLICT (post_id, user_id)
             DO UPDATE SET is_active = NOT likes.is_active, updated_at = $3
             RETURNING id, post_id, user_id, is_active, created_at, updated_at",
        )
        .bind(i64::from(post_id))
        .bind(i64::from(user_id))
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Like::try_from(row)
    }

    async fn list_for_post(
        &self,
        post_id: PostId,
        offset: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Like>, u64)> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE post_id = $1 AND is_active")
                .bind(i64::from(post_id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, LikeRow>(
            "SELECT id, post_id, user_id, is_active, created_at, updated_at FROM likes
             WHERE post_id = $1 AND is_active
             ORDER BY created_at ASC LIMIT $2 OFFSET $3",
        )
        .bind(i64::from(post_id))
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let likes = rows
            .into_iter()
            .map(Like::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((likes, total.max(0) as u64))
    }
}
