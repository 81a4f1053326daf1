//! Handlers for comments, both nested under `/articles/{article_id}` and at
//! `/comments/{comment_id}`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use newsroom_core::attributes::require;
use newsroom_core::error::CoreError;
use newsroom_core::types::DbId;
use newsroom_db::models::comment::{Comment, CreateComment};
use newsroom_db::repositories::{ArticleRepo, CommentRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::article::VoteBody;
use crate::response::{CommentResponse, CommentsResponse};
use crate::state::AppState;

/// Body of `POST /articles/{article_id}/comments`.
#[derive(Debug, Deserialize)]
pub struct NewCommentBody {
    pub username: Option<String>,
    pub body: Option<String>,
}

/// GET /api/articles/{article_id}/comments
pub async fn list_by_article(
    State(state): State<AppState>,
    ApiPath(article_id): ApiPath<DbId>,
) -> AppResult<Json<CommentsResponse<Comment>>> {
    if !ArticleRepo::exists(&state.pool, article_id).await? {
        return Err(AppError::Core(CoreError::article_not_found()));
    }
    let comments = CommentRepo::list_by_article(&state.pool, article_id).await?;
    Ok(Json(CommentsResponse { comments }))
}

/// POST /api/articles/{article_id}/comments
///
/// A missing article or unknown username is reported by the foreign key
/// constraints and mapped to 404 in [`AppError`].
pub async fn create(
    State(state): State<AppState>,
    ApiPath(article_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<NewCommentBody>,
) -> AppResult<(StatusCode, Json<CommentResponse<Comment>>)> {
    let input = CreateComment {
        article_id,
        author: require(input.username)?,
        body: require(input.body)?,
    };
    let comment = CommentRepo::create(&state.pool, &input).await?;
    tracing::info!(comment_id = comment.comment_id, article_id, "Comment created");
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// PATCH /api/comments/{comment_id}
pub async fn update_votes(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<VoteBody>,
) -> AppResult<Json<CommentResponse<Comment>>> {
    let delta = require(input.inc_votes)?;
    let comment = CommentRepo::update_votes(&state.pool, id, delta)
        .await?
        .ok_or(AppError::Core(CoreError::comment_not_found()))?;
    Ok(Json(CommentResponse { comment }))
}

/// DELETE /api/comments/{comment_id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CommentRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(comment_id = id, "Comment deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::comment_not_found()))
    }
}
