//! Shared primitive aliases.

/// Article and comment primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps emitted by the API are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
