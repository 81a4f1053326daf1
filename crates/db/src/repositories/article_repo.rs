//! Repository for the `articles` table.
//!
//! Every read that returns articles also computes `comment_count` through a
//! `LEFT JOIN` on `comments`, so rows without comments report 0.

use newsroom_core::article_query::{SortKey, SortOrder};
use newsroom_core::attributes::article_img_url_or_default;
use newsroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::{
    Article, ArticleListFilter, ArticleRow, ArticleSummary, ArticleSummaryRow, CreateArticle,
};

/// Listing columns: everything except `body`.
const SUMMARY_COLUMNS: &str = "a.author, a.title, a.article_id, a.topic, a.created_at, \
     a.votes, a.article_img_url";

/// Full article columns, for single-row reads and `RETURNING` projections.
const COLUMNS: &str = "a.article_id, a.title, a.topic, a.author, a.body, a.created_at, \
     a.votes, a.article_img_url";

/// Provides listing, lookup, insert and vote operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Fetch every article matching `filter`, aggregated and sorted.
    ///
    /// No `LIMIT`/`OFFSET` is applied; the caller paginates the result.
    pub async fn list(
        pool: &PgPool,
        filter: &ArticleListFilter<'_>,
    ) -> Result<Vec<ArticleSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}, COUNT(c.comment_id) AS comment_count \
             FROM articles a \
             LEFT JOIN comments c ON c.article_id = a.article_id \
             {where_clause}\
             GROUP BY a.article_id \
             ORDER BY {order_clause}",
            where_clause = where_clause(filter),
            order_clause = order_clause(filter.sort_key, filter.order),
        );

        let mut statement = sqlx::query_as::<_, ArticleSummaryRow>(&query);
        if let Some(topic) = filter.topic {
            statement = statement.bind(topic);
        }
        let rows = statement.fetch_all(pool).await?;

        tracing::debug!(
            rows = rows.len(),
            topic = filter.topic,
            sort_key = filter.sort_key.as_str(),
            "Fetched article candidates"
        );
        Ok(rows.into_iter().map(ArticleSummary::from).collect())
    }

    /// Find an article by ID, including its body and comment count.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, COUNT(c.comment_id) AS comment_count \
             FROM articles a \
             LEFT JOIN comments c ON c.article_id = a.article_id \
             WHERE a.article_id = $1 \
             GROUP BY a.article_id"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Article::from))
    }

    /// Whether an article with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM articles WHERE article_id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Insert a new article, returning the created row.
    ///
    /// Unknown `topic` or `author` values surface as foreign key violations
    /// (`articles_topic_fkey`, `articles_author_fkey`).
    pub async fn create(pool: &PgPool, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let query = format!(
            "WITH a AS ( \
                INSERT INTO articles (title, topic, author, body, article_img_url) \
                VALUES ($1, $2, $3, $4, $5) \
                RETURNING * \
             ) \
             SELECT {COLUMNS}, 0::BIGINT AS comment_count FROM a"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(&input.title)
            .bind(&input.topic)
            .bind(&input.author)
            .bind(&input.body)
            .bind(article_img_url_or_default(input.article_img_url.clone()))
            .fetch_one(pool)
            .await?;
        Ok(Article::from(row))
    }

    /// Add `delta` to an article's votes in a single statement.
    ///
    /// Returns `None` if no article with the given `id` exists.
    pub async fn update_votes(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "WITH a AS ( \
                UPDATE articles SET votes = votes + $2 \
                WHERE article_id = $1 \
                RETURNING * \
             ) \
             SELECT {COLUMNS}, \
                (SELECT COUNT(*) FROM comments c WHERE c.article_id = a.article_id) \
                    AS comment_count \
             FROM a"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Article::from))
    }
}

// ---------------------------------------------------------------------------
// Predicate / sort builders
// ---------------------------------------------------------------------------

/// `WHERE` clause for the listing query. The topic, when present, is always
/// bound as `$1`. Ends with a space when non-empty.
fn where_clause(filter: &ArticleListFilter<'_>) -> &'static str {
    match filter.topic {
        Some(_) => "WHERE a.topic = $1 ",
        None => "",
    }
}

/// SQL expression for each allow-listed sort key.
fn sort_expression(key: SortKey) -> &'static str {
    match key {
        SortKey::CreatedAt => "a.created_at",
        SortKey::Author => "a.author",
        SortKey::Title => "a.title",
        SortKey::ArticleId => "a.article_id",
        SortKey::Topic => "a.topic",
        SortKey::Votes => "a.votes",
        SortKey::CommentCount => "comment_count",
    }
}

fn sort_direction(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

/// `ORDER BY` body: the requested key, then `article_id` to break ties.
fn order_clause(key: SortKey, order: SortOrder) -> String {
    let primary = format!("{} {}", sort_expression(key), sort_direction(order));
    match key {
        SortKey::ArticleId => primary,
        _ => format!("{primary}, a.article_id ASC"),
    }
}
