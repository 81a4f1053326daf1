use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use newsroom_core::attributes::{
    INVALID_ATTRIBUTE_TYPE, INVALID_ID_TYPE, INVALID_QUERY_PARAMETER, MALFORMED_BODY,
    MISSING_ATTRIBUTE,
};
use newsroom_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "msg": ..., "desc": ... }`
/// bodies, where `msg` is the status category and `desc` the reason.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `newsroom_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matched the request path.
    #[error("Endpoint does not exist")]
    UnknownEndpoint,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_DESC: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, desc) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnknownEndpoint => (StatusCode::NOT_FOUND, self.to_string()),
        };

        let body = json!({
            "msg": category(status),
            "desc": desc,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// The `msg` field for a status code.
fn category(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request",
        StatusCode::NOT_FOUND => "Not found",
        _ => "Internal server error",
    }
}

/// Classify a sqlx error into an HTTP status and description.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations (23503) map to 404 for the missing referent,
///   identified by constraint name.
/// - Not-null violations (23502) map to 400 missing attribute.
/// - Numeric overflow (22003), e.g. a vote delta pushing past `i32`, maps to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23503") => {
                let missing = match db_err.constraint() {
                    Some("articles_topic_fkey") => CoreError::topic_not_found(),
                    Some("comments_article_id_fkey") => CoreError::article_not_found(),
                    Some("articles_author_fkey" | "comments_author_fkey") => {
                        CoreError::user_not_found()
                    }
                    other => {
                        tracing::warn!(constraint = ?other, "Unmapped foreign key violation");
                        return (
                            StatusCode::NOT_FOUND,
                            "Referenced resource not found".to_string(),
                        );
                    }
                };
                (StatusCode::NOT_FOUND, missing.to_string())
            }
            Some("23502") => (StatusCode::BAD_REQUEST, MISSING_ATTRIBUTE.to_string()),
            Some("22003") => (StatusCode::BAD_REQUEST, "Value out of range".to_string()),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DESC.to_string())
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DESC.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Extractor rejections
// ---------------------------------------------------------------------------

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(%rejection, "Rejected path parameter");
        AppError::BadRequest(INVALID_ID_TYPE.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(%rejection, "Rejected query string");
        AppError::BadRequest(INVALID_QUERY_PARAMETER.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "Rejected request body");
        let desc = match rejection {
            JsonRejection::JsonDataError(_) => INVALID_ATTRIBUTE_TYPE,
            _ => MALFORMED_BODY,
        };
        AppError::BadRequest(desc.to_string())
    }
}
