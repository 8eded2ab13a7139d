//! Route handlers organized by resource

pub mod articles;
pub mod comments;
pub mod health;
