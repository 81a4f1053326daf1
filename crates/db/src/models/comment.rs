//! Comment models and DTOs.

use chrono::{DateTime, Local};
use newsroom_core::timestamp::normalize;
use newsroom_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A comment as emitted by the API.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub comment_id: DbId,
    pub body: String,
    pub article_id: DbId,
    pub author: String,
    pub votes: i32,
    pub created_at: Timestamp,
}

/// A row from the `comments` table before timestamp normalization.
#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    pub comment_id: DbId,
    pub body: String,
    pub article_id: DbId,
    pub author: String,
    pub votes: i32,
    pub created_at: DateTime<Local>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            created_at: normalize(&row.created_at),
            comment_id: row.comment_id,
            body: row.body,
            article_id: row.article_id,
            author: row.author,
            votes: row.votes,
        }
    }
}

/// DTO for inserting a comment on an article.
#[derive(Debug, Clone)]
pub struct CreateComment {
    pub article_id: DbId,
    pub author: String,
    pub body: String,
}
