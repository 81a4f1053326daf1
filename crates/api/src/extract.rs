//! Extractors whose rejections are reported as [`AppError`] bodies.
//!
//! The stock axum extractors reject with plain-text responses; wrapping them
//! routes every malformed id, query string, or body through the same
//! `{ "msg", "desc" }` error shape as the handlers themselves.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// Path parameters. Non-integer ids reject with "Invalid ID type".
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string. Unknown keys reject with "invalid query parameter".
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// JSON request body. Wrongly typed attributes reject with
/// "Invalid attribute type"; non-JSON bodies with "Malformed request body".
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
