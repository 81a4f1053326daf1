//! Route definitions for the `/comments` resource.

use axum::routing::patch;
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// PATCH  /{comment_id}    -> update_votes
/// DELETE /{comment_id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{comment_id}",
        patch(comment::update_votes).delete(comment::delete),
    )
}
