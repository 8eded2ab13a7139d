use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Article row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub body: String,
    #[serde(rename = "isApproved")]
    pub is_approved: bool,
}

/// Body of `POST /articles` and `PUT /articles/{id}`.
///
/// Every field is required and strictly typed: `"isApproved": "true"` is
/// rejected, as is a numeric `title`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub body: String,
    #[serde(rename = "isApproved")]
    pub is_approved: bool,
}
