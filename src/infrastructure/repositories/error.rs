use crate::domain::errors::DomainError;

const CNT_POST_TITLE: &str = "posts_title_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_LIKE_PAIR: &str = "likes_post_id_user_id_key";
const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_COMMENT_POST: &str = "comments_post_id_fkey";
const CNT_LIKE_POST: &str = "likes_post_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_TITLE => DomainError::Conflict("title already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_LIKE_PAIR => {
                        // The toggle upsert resolves this conflict itself;
                        // reaching here means a non-toggle insert raced.
                        DomainError::Conflict("like already exists".into())
                    }
                    CNT_POST_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_COMMENT_POST | CNT_LIKE_POST => {
                        DomainError::NotFound("post not found".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
