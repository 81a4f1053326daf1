/// Domain errors shared by every layer.
///
/// The `Display` text of each variant is the human-readable description
/// returned to API clients in the `desc` field.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    ///
    /// Renders as `No {entity} found with given {key}`, e.g.
    /// `No article found with given ID`.
    #[error("No {entity} found with given {key}")]
    NotFound {
        entity: &'static str,
        key: &'static str,
    },

    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    pub fn article_not_found() -> Self {
        CoreError::NotFound {
            entity: "article",
            key: "ID",
        }
    }

    pub fn comment_not_found() -> Self {
        CoreError::NotFound {
            entity: "comment",
            key: "ID",
        }
    }

    pub fn topic_not_found() -> Self {
        CoreError::NotFound {
            entity: "topic",
            key: "slug",
        }
    }

    pub fn user_not_found() -> Self {
        CoreError::NotFound {
            entity: "user",
            key: "username",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_descriptions() {
        assert_eq!(
            CoreError::article_not_found().to_string(),
            "No article found with given ID"
        );
        assert_eq!(
            CoreError::topic_not_found().to_string(),
            "No topic found with given slug"
        );
        assert_eq!(
            CoreError::user_not_found().to_string(),
            "No user found with given username"
        );
    }

    #[test]
    fn validation_displays_message_verbatim() {
        let err = CoreError::Validation("limit must be a number".into());
        assert_eq!(err.to_string(), "limit must be a number");
    }
}
