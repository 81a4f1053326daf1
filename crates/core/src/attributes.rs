//! Request attribute rules shared by the mutation endpoints.

use crate::error::CoreError;

/// Image used for articles created without an `article_img_url`.
pub const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

pub const MISSING_ATTRIBUTE: &str = "Missing attribute in request body";
pub const INVALID_ATTRIBUTE_TYPE: &str = "Invalid attribute type";
pub const MALFORMED_BODY: &str = "Malformed request body";
pub const INVALID_ID_TYPE: &str = "Invalid ID type";
pub const INVALID_QUERY_PARAMETER: &str = "invalid query parameter";

/// Unwrap a required body attribute, failing with [`MISSING_ATTRIBUTE`].
pub fn require<T>(value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(MISSING_ATTRIBUTE.to_string()))
}

/// Resolve the image URL for a new article.
pub fn article_img_url_or_default(value: Option<String>) -> String {
    value.unwrap_or_else(|| DEFAULT_ARTICLE_IMG_URL.to_string())
}
