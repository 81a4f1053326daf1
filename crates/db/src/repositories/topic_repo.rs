//! Repository for the `topics` table.

use sqlx::PgPool;

use crate::models::topic::Topic;

const COLUMNS: &str = "slug, description";

/// Read-only access to topics.
pub struct TopicRepo;

impl TopicRepo {
    /// List all topics ordered by slug.
    pub async fn list(pool: &PgPool) -> Result<Vec<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics ORDER BY slug");
        sqlx::query_as::<_, Topic>(&query).fetch_all(pool).await
    }

    /// Find a topic by its slug (exact match).
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics WHERE slug = $1");
        sqlx::query_as::<_, Topic>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}
