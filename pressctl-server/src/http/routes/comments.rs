//! Comment endpoints
//!
//! Reads embed the parent article. Writes validate the description length
//! before touching the database.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::CommentRepo;
use crate::http::error::{during, Action, ApiError};
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::response::{self, Envelope};
use crate::http::server::AppState;
use crate::models::{Comment, CommentDraft, CommentWithArticle};

/// GET /comments - list all comments with their articles
async fn list_comments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<CommentWithArticle>>>, ApiError> {
    let comments = CommentRepo::new(&state.pool)
        .list()
        .await
        .map_err(during(Action::Fetch))?;

    Ok(Json(Envelope::data(comments)))
}

/// GET /comments/{id} - get a comment with its article
async fn get_comment(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Envelope<CommentWithArticle>>, ApiError> {
    let comment = CommentRepo::new(&state.pool)
        .get(id)
        .await
        .map_err(during(Action::Fetch))?;

    Ok(Json(Envelope::with_message(response::found(id), comment)))
}

/// POST /comments - create a comment on an existing article
async fn create_comment(
    State(state): State<Arc<AppState>>,
    ValidJson(draft): ValidJson<CommentDraft>,
) -> Result<Json<Envelope<Comment>>, ApiError> {
    let new = draft.validate()?;

    let comment = CommentRepo::new(&state.pool)
        .create(&new)
        .await
        .map_err(during(Action::Create))?;

    Ok(Json(Envelope::with_message(response::created(), comment)))
}

/// PUT /comments/{id} - replace a comment's fields
async fn update_comment(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    ValidJson(draft): ValidJson<CommentDraft>,
) -> Result<Json<Envelope<Comment>>, ApiError> {
    let new = draft.validate()?;

    let comment = CommentRepo::new(&state.pool)
        .update(id, &new)
        .await
        .map_err(during(Action::Update))?;

    Ok(Json(Envelope::with_message(response::updated(id), comment)))
}

/// DELETE /comments/{id} - delete a comment
async fn delete_comment(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Envelope<()>>, ApiError> {
    CommentRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(during(Action::Delete))?;

    Ok(Json(Envelope::message(response::deleted(id))))
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/comments", get(list_comments).post(create_comment))
        .route(
            "/comments/{id}",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
}
