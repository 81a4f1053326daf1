//! Route definitions for the `/topics` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::topic;
use crate::state::AppState;

/// Routes mounted at `/topics`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(topic::list))
}
