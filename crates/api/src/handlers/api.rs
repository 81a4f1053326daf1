//! `GET /api` endpoint index and the catch-all for unknown routes.

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::response::EndpointsResponse;

/// Documentation for one endpoint in the `GET /api` index.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EndpointDoc {
    pub description: &'static str,
    #[serde(skip_serializing_if = "no_queries")]
    pub queries: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<&'static str>,
}

fn no_queries(queries: &&[&str]) -> bool {
    queries.is_empty()
}

const fn doc(description: &'static str) -> EndpointDoc {
    EndpointDoc {
        description,
        queries: &[],
        request_body: None,
    }
}

/// Every public route, keyed by `"METHOD path"`.
pub const ENDPOINTS: &[(&str, EndpointDoc)] = &[
    ("GET /api", doc("serves this index of all available endpoints")),
    ("GET /api/topics", doc("serves an array of all topics")),
    (
        "GET /api/articles",
        EndpointDoc {
            description: "serves an array of articles with comment counts, optionally \
                          filtered, sorted and paginated",
            queries: &["topic", "sorted_by", "order", "limit", "p"],
            request_body: None,
        },
    ),
    (
        "POST /api/articles",
        EndpointDoc {
            description: "creates an article; article_img_url is optional",
            queries: &[],
            request_body: Some(r#"{ "author", "title", "body", "topic", "article_img_url"? }"#),
        },
    ),
    (
        "GET /api/articles/:article_id",
        doc("serves a single article with its body and comment count"),
    ),
    (
        "PATCH /api/articles/:article_id",
        EndpointDoc {
            description: "adds inc_votes to the article's votes",
            queries: &[],
            request_body: Some(r#"{ "inc_votes": integer }"#),
        },
    ),
    (
        "GET /api/articles/:article_id/comments",
        doc("serves an article's comments, newest first"),
    ),
    (
        "POST /api/articles/:article_id/comments",
        EndpointDoc {
            description: "adds a comment to an article",
            queries: &[],
            request_body: Some(r#"{ "username", "body" }"#),
        },
    ),
    (
        "PATCH /api/comments/:comment_id",
        EndpointDoc {
            description: "adds inc_votes to the comment's votes",
            queries: &[],
            request_body: Some(r#"{ "inc_votes": integer }"#),
        },
    ),
    ("DELETE /api/comments/:comment_id", doc("deletes a comment")),
    ("GET /api/users", doc("serves an array of all users")),
    ("GET /api/users/:username", doc("serves a single user")),
];

/// GET /api
pub async fn list_endpoints() -> Json<EndpointsResponse<BTreeMap<&'static str, EndpointDoc>>> {
    Json(EndpointsResponse {
        endpoints: ENDPOINTS.iter().copied().collect(),
    })
}

/// Fallback for any path no route matched.
pub async fn unknown_endpoint() -> AppError {
    AppError::UnknownEndpoint
}
