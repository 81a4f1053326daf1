//! Pure domain logic for the newsroom API.
//!
//! Nothing in this crate touches the network or the database, so every
//! rule here can be unit tested directly.

pub mod article_query;
pub mod attributes;
pub mod error;
pub mod timestamp;
pub mod types;
