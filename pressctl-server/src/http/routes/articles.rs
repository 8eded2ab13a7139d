//! Article endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::ArticleRepo;
use crate::http::error::{during, Action, ApiError};
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::response::{self, Envelope};
use crate::http::server::AppState;
use crate::models::{Article, ArticleDraft};

/// GET /articles - list all articles
async fn list_articles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<Article>>>, ApiError> {
    let articles = ArticleRepo::new(&state.pool)
        .list()
        .await
        .map_err(during(Action::Fetch))?;

    Ok(Json(Envelope::data(articles)))
}

/// GET /articles/{id} - get a single article
async fn get_article(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Envelope<Article>>, ApiError> {
    let article = ArticleRepo::new(&state.pool)
        .get(id)
        .await
        .map_err(during(Action::Fetch))?;

    Ok(Json(Envelope::with_message(response::found(id), article)))
}

/// POST /articles - create an article
async fn create_article(
    State(state): State<Arc<AppState>>,
    ValidJson(draft): ValidJson<ArticleDraft>,
) -> Result<Json<Envelope<Article>>, ApiError> {
    let article = ArticleRepo::new(&state.pool)
        .create(&draft)
        .await
        .map_err(during(Action::Create))?;

    Ok(Json(Envelope::with_message(response::created(), article)))
}

/// PUT /articles/{id} - replace an article's fields
async fn update_article(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    ValidJson(draft): ValidJson<ArticleDraft>,
) -> Result<Json<Envelope<Article>>, ApiError> {
    let article = ArticleRepo::new(&state.pool)
        .update(id, &draft)
        .await
        .map_err(during(Action::Update))?;

    Ok(Json(Envelope::with_message(response::updated(id), article)))
}

/// DELETE /articles/{id} - delete an article and its comments
async fn delete_article(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Envelope<()>>, ApiError> {
    ArticleRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(during(Action::Delete))?;

    Ok(Json(Envelope::message(response::deleted(id))))
}

/// Article routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/articles", get(list_articles).post(create_article))
        .route(
            "/articles/{id}",
            get(get_article).put(update_article).delete(delete_article),
        )
}
