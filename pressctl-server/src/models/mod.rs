//! Records and request payloads
//!
//! Records mirror table rows one-to-one. Drafts are what clients send;
//! serde enforces field types, the constructors here enforce the rest.

pub mod article;
pub mod comment;
pub mod validation;

pub use article::{Article, ArticleDraft};
pub use comment::{Comment, CommentDescription, CommentDraft, CommentWithArticle, NewComment};
pub use validation::ValidationError;
