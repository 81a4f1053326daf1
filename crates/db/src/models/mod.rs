//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as emitted by the API
//! - A `FromRow` row struct where the decoded row needs post-processing
//!   (timestamp normalization) before it becomes the entity
//! - A create DTO for inserts where the entity is writable

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
