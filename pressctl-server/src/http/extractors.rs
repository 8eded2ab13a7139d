//! Custom Axum extractors
//!
//! Both turn axum's own rejections into [`ApiError`] so every failure
//! shares the same JSON envelope.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::{Action, ApiError};
use crate::models::ValidationError;

/// Extract a numeric record id from the path.
///
/// A non-numeric id is answered like a failure of the request's action,
/// not as a validation error, and is only logged at debug level.
pub struct RecordId(pub i32);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let action = Action::from_method(&parts.method);

        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidId {
                action,
                detail: e.body_text(),
            })?;

        let id = raw
            .parse::<i32>()
            .map_err(|e| ApiError::InvalidId {
                action,
                detail: format!("invalid id '{}': {}", raw, e),
            })?;

        Ok(Self(id))
    }
}

/// JSON body that rejects with a 400 validation error.
///
/// Covers malformed JSON, a missing `Content-Type`, missing fields and
/// fields of the wrong type.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            ApiError::Validation(ValidationError::Body {
                reason: e.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}
