//! Comment records and payload validation

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Article, ValidationError};

/// Maximum length for comment descriptions, matching `VARCHAR(255)`
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Comment row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Comment {
    pub id: i32,
    pub article_id: i32,
    pub description: String,
}

/// Comment with its parent article fetched eagerly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentWithArticle {
    #[serde(flatten)]
    pub comment: Comment,
    pub article: Article,
}

/// Body of `POST /comments` and `PUT /comments/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommentDraft {
    pub article_id: i32,
    pub description: String,
}

impl CommentDraft {
    /// Check limits serde cannot express.
    pub fn validate(self) -> Result<NewComment, ValidationError> {
        Ok(NewComment {
            article_id: self.article_id,
            description: CommentDescription::new(self.description)?,
        })
    }
}

/// Validated comment payload, ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub article_id: i32,
    pub description: CommentDescription,
}

/// Comment text, at most [`MAX_DESCRIPTION_LEN`] characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDescription(String);

impl CommentDescription {
    /// Length is counted in characters, as Postgres counts `VARCHAR(n)`.
    ///
    /// # Example
    /// ```
    /// use pressctl_server::models::CommentDescription;
    ///
    /// assert!(CommentDescription::new("lorem ipsum".to_string()).is_ok());
    /// assert!(CommentDescription::new("x".repeat(256)).is_err());
    /// ```
    pub fn new(s: String) -> Result<Self, ValidationError> {
        if s.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::TooLong {
                field: "description",
                max: MAX_DESCRIPTION_LEN,
            });
        }

        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
