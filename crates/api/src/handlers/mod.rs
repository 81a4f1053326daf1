pub mod api;
pub mod article;
pub mod comment;
pub mod health;
pub mod topic;
pub mod user;
