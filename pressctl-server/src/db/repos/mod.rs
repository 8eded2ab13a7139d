//! Repository implementations for database access
//!
//! Each repository borrows the pool and maps rows into [`crate::models`]
//! records. Absence of a row is reported as [`DbError::NotFound`], never
//! as an empty success.

pub mod articles;
pub mod comments;

pub use articles::ArticleRepo;
pub use comments::CommentRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// A row points at a parent that does not exist
    #[error("referenced {resource} '{id}' does not exist")]
    MissingReference { resource: &'static str, id: String },
}
