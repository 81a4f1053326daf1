pub mod articles;
pub mod comments;
pub mod health;
pub mod topics;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                         endpoint index
///
/// /topics                                   list
///
/// /articles                                 list (filter/sort/paginate), create
/// /articles/{article_id}                    get, vote
/// /articles/{article_id}/comments           list, create
///
/// /comments/{comment_id}                    vote, delete
///
/// /users                                    list
/// /users/{username}                         get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::api::list_endpoints))
        .nest("/topics", topics::router())
        .nest("/articles", articles::router())
        .nest("/comments", comments::router())
        .nest("/users", users::router())
}
