//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values and check the
//! `{ "msg": ..., "desc": ... }` body. No HTTP server or database needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use newsroom_api::error::AppError;
use newsroom_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(CoreError::article_not_found().into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["msg"], "Not found");
    assert_eq!(json["desc"], "No article found with given ID");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("cannot sort by given attribute".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["msg"], "Bad request");
    assert_eq!(json["desc"], "cannot sort by given attribute");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("Invalid ID type".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["msg"], "Bad request");
    assert_eq!(json["desc"], "Invalid ID type");
}

#[tokio::test]
async fn unknown_endpoint_returns_404() {
    let (status, json) = error_to_response(AppError::UnknownEndpoint).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["desc"], "Endpoint does not exist");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["msg"], "Not found");
}

#[tokio::test]
async fn other_database_errors_return_500_and_sanitize_message() {
    let err = AppError::Database(sqlx::Error::Protocol("secret connection detail".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["msg"], "Internal server error");
    let desc = json["desc"].as_str().unwrap();
    assert!(!desc.contains("secret"), "internal details must not leak: {desc}");
}
