//! HTTP-level integration tests for comment endpoints.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, delete, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/seed.sql"))]
async fn list_comments_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/articles/1/comments").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<i64> = json["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["comment_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 2, 18, 13, 7, 8, 17, 12, 3, 4, 9]);
    assert_eq!(json["comments"][0]["article_id"], 1);
    assert_eq!(json["comments"][0]["author"], "icellusedkars");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/seed.sql"))]
async fn list_comments_of_article_without_comments_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/articles/2/comments").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["comments"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/seed.sql"))]
async fn list_comments_of_missing_article_is_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/articles/999/comments").await;
    assert_error(response, StatusCode::NOT_FOUND, "No article found with given ID").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/articles/one/comments").await;
    assert_error(response, StatusCode::BAD_REQUEST, "Invalid ID type").await;
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/seed.sql"))]
async fn post_comment_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/articles/2/comments",
        json!({"username": "lurker", "body": "First!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let comment = &json["comment"];
    assert_eq!(comment["comment_id"], 19);
    assert_eq!(comment["article_id"], 2);
    assert_eq!(comment["author"], "lurker");
    assert_eq!(comment["body"], "First!");
    assert_eq!(comment["votes"], 0);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/articles/2").await).await;
    assert_eq!(json["article"]["comment_count"], 1);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/seed.sql"))]
async fn post_comment_unknown_references_are_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/articles/2/comments",
        json!({"username": "nobody", "body": "hi"}),
    )
    .await;
    assert_error(response, StatusCode::NOT_FOUND, "No user found with given username").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/articles/999/comments",
        json!({"username": "lurker", "body": "hi"}),
    )
    .await;
    assert_error(response, StatusCode::NOT_FOUND, "No article found with given ID").await;
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/seed.sql"))]
async fn post_comment_missing_body_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/articles/2/comments", json!({"username": "lurker"})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "Missing attribute in request body").await;
}

// ---------------------------------------------------------------------------
// Votes and deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/seed.sql"))]
async fn patch_comment_votes(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, "/api/comments/4", json!({"inc_votes": 1})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["comment"]["votes"], -99);

    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, "/api/comments/999", json!({"inc_votes": 1})).await;
    assert_error(response, StatusCode::NOT_FOUND, "No comment found with given ID").await;

    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/comments/4", json!({"inc_votes": 1.5})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "Invalid attribute type").await;
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/seed.sql"))]
async fn delete_comment_returns_204_then_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/comments/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/comments/1").await;
    assert_error(response, StatusCode::NOT_FOUND, "No comment found with given ID").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/articles/9").await).await;
    assert_eq!(json["article"]["comment_count"], 1);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/seed.sql"))]
async fn delete_comment_with_invalid_id_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/comments/first").await;
    assert_error(response, StatusCode::BAD_REQUEST, "Invalid ID type").await;
}
