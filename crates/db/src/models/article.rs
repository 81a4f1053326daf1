//! Article models and DTOs.
//!
//! `created_at` is decoded in the process-local zone and normalized with
//! [`newsroom_core::timestamp::normalize`] when a row becomes an entity.

use chrono::{DateTime, Local};
use newsroom_core::article_query::{ArticleQuery, SortKey, SortOrder};
use newsroom_core::timestamp::normalize;
use newsroom_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An article as listed by `GET /articles`: every field except `body`,
/// plus the derived `comment_count`.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummary {
    pub author: String,
    pub title: String,
    pub article_id: DbId,
    pub topic: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

/// Raw listing row before timestamp normalization.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleSummaryRow {
    pub author: String,
    pub title: String,
    pub article_id: DbId,
    pub topic: String,
    pub created_at: DateTime<Local>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl From<ArticleSummaryRow> for ArticleSummary {
    fn from(row: ArticleSummaryRow) -> Self {
        Self {
            created_at: normalize(&row.created_at),
            author: row.author,
            title: row.title,
            article_id: row.article_id,
            topic: row.topic,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count,
        }
    }
}

/// A single article with its body and comment count.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub article_id: DbId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct ArticleRow {
    pub article_id: DbId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Local>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            created_at: normalize(&row.created_at),
            article_id: row.article_id,
            title: row.title,
            topic: row.topic,
            author: row.author,
            body: row.body,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count,
        }
    }
}

/// DTO for inserting a new article.
///
/// `article_img_url` falls back to
/// [`newsroom_core::attributes::DEFAULT_ARTICLE_IMG_URL`] when `None`.
#[derive(Debug, Clone)]
pub struct CreateArticle {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub article_img_url: Option<String>,
}

/// The part of an [`ArticleQuery`] that shapes the database read.
///
/// Pagination is deliberately absent: the full filtered set is fetched so
/// the total count can be reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleListFilter<'a> {
    pub topic: Option<&'a str>,
    pub sort_key: SortKey,
    pub order: SortOrder,
}

impl<'a> From<&'a ArticleQuery> for ArticleListFilter<'a> {
    fn from(query: &'a ArticleQuery) -> Self {
        Self {
            topic: query.topic.as_deref(),
            sort_key: query.sort_key,
            order: query.order,
        }
    }
}
