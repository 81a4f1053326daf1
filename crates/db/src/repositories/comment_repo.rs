//! Repository for the `comments` table.

use newsroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CommentRow, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "comment_id, body, article_id, author, votes, created_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// List an article's comments, newest first.
    pub async fn list_by_article(
        pool: &PgPool,
        article_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments \
             WHERE article_id = $1 \
             ORDER BY created_at DESC, comment_id DESC"
        );
        let rows = sqlx::query_as::<_, CommentRow>(&query)
            .bind(article_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    /// Insert a new comment, returning the created row.
    ///
    /// Unknown articles or authors surface as foreign key violations
    /// (`comments_article_id_fkey`, `comments_author_fkey`).
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (body, article_id, author) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&query)
            .bind(&input.body)
            .bind(input.article_id)
            .bind(&input.author)
            .fetch_one(pool)
            .await?;
        Ok(Comment::from(row))
    }

    /// Add `delta` to a comment's votes. Votes have no floor.
    ///
    /// Returns `None` if no comment with the given `id` exists.
    pub async fn update_votes(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET votes = votes + $2 \
             WHERE comment_id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Comment::from))
    }

    /// Permanently delete a comment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
