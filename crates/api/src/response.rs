//! Response envelope types for API handlers.
//!
//! Every payload is wrapped in a single named key (`{ "article": ... }`,
//! `{ "comments": [...] }`, ...). Use these instead of ad-hoc
//! `serde_json::json!` to get compile-time type safety. Article listings use
//! [`newsroom_core::article_query::ArticlePage`], which carries the optional
//! `total_count` alongside the `articles` key.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ArticleResponse<T: Serialize> {
    pub article: T,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse<T: Serialize> {
    pub comment: T,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse<T: Serialize> {
    pub comments: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse<T: Serialize> {
    pub topics: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse<T: Serialize> {
    pub user: T,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse<T: Serialize> {
    pub users: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct EndpointsResponse<T: Serialize> {
    pub endpoints: T,
}
