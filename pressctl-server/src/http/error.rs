//! API error types with IntoResponse
//!
//! Every failure is a JSON body with a `message`. Unexpected database
//! errors are logged and reported as a generic 400 for the action that
//! failed; details never reach the client.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// What the handler was doing when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Action {
    /// Past participle used in the failure message
    pub fn verb(self) -> &'static str {
        match self {
            Self::Fetch => "diambil",
            Self::Create => "ditambahkan",
            Self::Update => "diubah",
            Self::Delete => "dihapus",
        }
    }

    pub fn from_method(method: &Method) -> Self {
        if *method == Method::POST {
            Self::Create
        } else if *method == Method::PUT || *method == Method::PATCH {
            Self::Update
        } else if *method == Method::DELETE {
            Self::Delete
        } else {
            Self::Fetch
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body failed validation (400)
    Validation(ValidationError),

    /// Requested record does not exist (404)
    NotFound { resource: &'static str, id: String },

    /// Payload references a parent that does not exist (404)
    MissingReference { resource: &'static str, id: String },

    /// Path id is not a number (400, same body as `Failed`)
    InvalidId { action: Action, detail: String },

    /// Anything else went wrong while performing `action` (400, logged)
    Failed { action: Action, detail: String },
}

impl ApiError {
    pub fn failed(action: Action, detail: impl Into<String>) -> Self {
        Self::Failed {
            action,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidId { .. } | Self::Failed { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } | Self::MissingReference { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => {
                tracing::debug!("Rejected request body: {}", e);
                json!({ "message": "Invalid input data" })
            }
            Self::NotFound { resource, id } => {
                tracing::debug!("{} '{}' not found", resource, id);
                json!({ "message": "Data tidak ditemukan!", "data": null })
            }
            Self::MissingReference { resource, id } => {
                tracing::debug!("referenced {} '{}' not found", resource, id);
                json!({ "message": format!("{} ID tidak ditemukan!", capitalize(resource)) })
            }
            Self::InvalidId { action, detail } => {
                tracing::debug!(?action, "Rejected path id: {}", detail);
                json!({ "message": format!("Data gagal {}!", action.verb()), "data": null })
            }
            Self::Failed { action, detail } => {
                tracing::error!(?action, "Request failed: {}", detail);
                json!({ "message": format!("Data gagal {}!", action.verb()), "data": null })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

/// Map a repository error for a handler performing `action`.
///
/// ```ignore
/// let article = ArticleRepo::new(&state.pool).get(id).await.map_err(during(Action::Fetch))?;
/// ```
pub fn during(action: Action) -> impl Fn(DbError) -> ApiError {
    move |e| match e {
        DbError::NotFound { resource, id } => ApiError::NotFound { resource, id },
        DbError::MissingReference { resource, id } => ApiError::MissingReference { resource, id },
        other => ApiError::failed(action, other.to_string()),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
