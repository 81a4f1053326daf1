//! Handlers for the `/articles` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use newsroom_core::article_query::{paginate, ArticleListParams, ArticlePage};
use newsroom_core::attributes::require;
use newsroom_core::error::CoreError;
use newsroom_core::types::DbId;
use newsroom_db::models::article::{Article, ArticleListFilter, ArticleSummary, CreateArticle};
use newsroom_db::repositories::{ArticleRepo, TopicRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::response::ArticleResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /articles`. Fields are optional here so that a missing
/// attribute is reported as such rather than as a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct NewArticleBody {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
    pub article_img_url: Option<String>,
}

impl NewArticleBody {
    fn into_create(self) -> Result<CreateArticle, CoreError> {
        Ok(CreateArticle {
            author: require(self.author)?,
            title: require(self.title)?,
            body: require(self.body)?,
            topic: require(self.topic)?,
            article_img_url: self.article_img_url,
        })
    }
}

/// Body of the vote endpoints: `{ "inc_votes": <integer> }`.
#[derive(Debug, Deserialize)]
pub struct VoteBody {
    pub inc_votes: Option<i32>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fail with "No topic found with given slug" unless `slug` exists.
async fn ensure_topic_exists(pool: &sqlx::PgPool, slug: &str) -> AppResult<()> {
    TopicRepo::find_by_slug(pool, slug)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::topic_not_found()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/articles
///
/// Validates the query, checks the topic filter against storage, fetches
/// the full sorted candidate set in one read, then paginates it.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ArticleListParams>,
) -> AppResult<Json<ArticlePage<ArticleSummary>>> {
    let query = params.validate()?;

    if let Some(slug) = query.topic.as_deref() {
        ensure_topic_exists(&state.pool, slug).await?;
    }

    let candidates = ArticleRepo::list(&state.pool, &ArticleListFilter::from(&query)).await?;
    let page = paginate(candidates, query.pagination)?;

    tracing::debug!(
        topic = query.topic.as_deref(),
        sort_key = query.sort_key.as_str(),
        returned = page.articles.len(),
        total_count = page.total_count,
        "Article listing"
    );
    Ok(Json(page))
}

/// POST /api/articles
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewArticleBody>,
) -> AppResult<(StatusCode, Json<ArticleResponse<Article>>)> {
    let input = input.into_create()?;
    let article = ArticleRepo::create(&state.pool, &input).await?;
    tracing::info!(article_id = article.article_id, topic = %article.topic, "Article created");
    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}

/// GET /api/articles/{article_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ArticleResponse<Article>>> {
    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::article_not_found()))?;
    Ok(Json(ArticleResponse { article }))
}

/// PATCH /api/articles/{article_id}
pub async fn update_votes(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<VoteBody>,
) -> AppResult<Json<ArticleResponse<Article>>> {
    let delta = require(input.inc_votes)?;
    let article = ArticleRepo::update_votes(&state.pool, id, delta)
        .await?
        .ok_or(AppError::Core(CoreError::article_not_found()))?;
    Ok(Json(ArticleResponse { article }))
}

#[cfg(test)]
mod tests {
    use newsroom_core::attributes::MISSING_ATTRIBUTE;

    use super::*;

    fn full_body() -> NewArticleBody {
        NewArticleBody {
            author: Some("lurker".into()),
            title: Some("t".into()),
            body: Some("b".into()),
            topic: Some("cats".into()),
            article_img_url: None,
        }
    }

    #[test]
    fn complete_body_converts() {
        let create = full_body().into_create().unwrap();
        assert_eq!(create.author, "lurker");
        assert!(create.article_img_url.is_none());
    }

    #[test]
    fn each_required_attribute_is_checked() {
        let strip: [fn(&mut NewArticleBody); 4] = [
            |b| b.author = None,
            |b| b.title = None,
            |b| b.body = None,
            |b| b.topic = None,
        ];
        for strip_field in strip {
            let mut body = full_body();
            strip_field(&mut body);
            match body.into_create() {
                Err(CoreError::Validation(msg)) => assert_eq!(msg, MISSING_ATTRIBUTE),
                other => panic!("expected missing attribute, got {other:?}"),
            }
        }
    }
}
