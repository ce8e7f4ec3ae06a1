// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{
        CreateCommentCommand, CreatePostCommand, DeleteCommentCommand, DeletePostCommand,
        ToggleLikeCommand, UpdatePostCommand,
    },
    dto::{CommentDto, LikeDto, Page, PostDto, pagination::PageParams},
    error::ApplicationError,
    queries::posts::{ListCommentsQuery, ListLikesQuery, ListPostsQuery, RetrievePostQuery},
};
use crate::domain::post::PermissionLevel;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub read_permission: Option<PermissionLevel>,
    pub edit_permission: Option<PermissionLevel>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub read_permission: Option<PermissionLevel>,
    pub edit_permission: Option<PermissionLevel>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteCommentParams {
    pub comment_id: Option<i64>,
}

pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<PostDto>>> {
    state
        .services
        .post_queries
        .list_posts(&actor.identity(), ListPostsQuery { params })
        .await
        .into_http()
        .map(Json)
}

pub async fn retrieve_post(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .retrieve_post(&actor.identity(), RetrievePostQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
        read_permission: payload.read_permission,
        edit_permission: payload.edit_permission,
    };

    let created = state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content: payload.content,
        read_permission: payload.read_permission,
        edit_permission: payload.edit_permission,
    };

    state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<LikeDto>> {
    state
        .services
        .post_commands
        .toggle_like(&user, ToggleLikeCommand { post_id: id })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_likes(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<LikeDto>>> {
    state
        .services
        .post_queries
        .list_likes(
            &actor.identity(),
            ListLikesQuery {
                post_id: id,
                params,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let created = state
        .services
        .post_commands
        .create_comment(
            &user,
            CreateCommentCommand {
                post_id: id,
                content: payload.content,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<CommentDto>>> {
    state
        .services
        .post_queries
        .list_comments(
            &actor.identity(),
            ListCommentsQuery {
                post_id: id,
                params,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Query(params): Query<DeleteCommentParams>,
) -> HttpResult<StatusCode> {
    let comment_id = params.comment_id.ok_or_else(|| {
        HttpError::from_error(ApplicationError::validation(
            "No query param in the URL (comment_id).",
        ))
    })?;

    state
        .services
        .post_commands
        .delete_comment(
            &user,
            DeleteCommentCommand {
                post_id: id,
                comment_id,
            },
        )
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
