#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use pressctl_server::{build_router, AppState};

/// Router over a pool that never connects until a query runs.
///
/// Only suitable for requests rejected before reaching the database.
pub fn offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://pressctl@127.0.0.1:1/pressctl")
        .expect("lazy pool");
    build_router(AppState::new(pool))
}

/// Router over the database named by `DATABASE_URL`, migrated.
pub async fn live_app() -> (Router, PgPool) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = pressctl_server::create_pool(&url)
        .await
        .expect("pool creation failed");
    pressctl_server::db::migrations::run(&pool)
        .await
        .expect("migrations failed");
    (build_router(AppState::new(pool.clone())), pool)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, raw: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw.to_owned()))
        .unwrap();

    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
