//! Route definitions for the `/articles` resource.
//!
//! Also nests the comment routes under `/articles/{article_id}/comments`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{article, comment};
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{article_id}                  -> get_by_id
/// PATCH  /{article_id}                  -> update_votes
///
/// GET    /{article_id}/comments         -> comment::list_by_article
/// POST   /{article_id}/comments         -> comment::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(article::list).post(article::create))
        .route(
            "/{article_id}",
            get(article::get_by_id).patch(article::update_votes),
        )
        .route(
            "/{article_id}/comments",
            get(comment::list_by_article).post(comment::create),
        )
}
