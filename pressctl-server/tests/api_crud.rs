//! End-to-end CRUD against a real database.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p pressctl-server -- --ignored
//!
//! Tests create their own rows and never truncate, so they can share a
//! database and run in parallel.

mod common;

use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};

use common::{live_app, send};

async fn create_article(app: &Router, title: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/articles",
        Some(json!({"title": title, "body": "isi artikel", "isApproved": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Data berhasil ditambahkan!");
    body["data"].clone()
}

async fn create_comment(app: &Router, article_id: i64, description: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/comments",
        Some(json!({"article_id": article_id, "description": description})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["data"].clone()
}

#[tokio::test]
#[ignore = "requires database"]
async fn created_article_round_trips() {
    let (app, _pool) = live_app().await;

    let created = create_article(&app, "round trip").await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/articles/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], format!("Data dengan ID {id} berhasil ditemukan!"));
    assert_eq!(body["data"]["title"], "round trip");
    assert_eq!(body["data"]["body"], "isi artikel");
    assert_eq!(body["data"]["isApproved"], false);

    let (status, body) = send(&app, "GET", "/articles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a["id"].as_i64() == Some(id)));
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_replaces_article_fields() {
    let (app, _pool) = live_app().await;
    let id = create_article(&app, "before").await["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/articles/{id}"),
        Some(json!({"title": "after", "body": "baru", "isApproved": true})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], format!("Data dengan ID {id} berhasil diubah!"));
    assert_eq!(
        body["data"],
        json!({"id": id, "title": "after", "body": "baru", "isApproved": true})
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn rejected_update_leaves_article_unchanged() {
    let (app, _pool) = live_app().await;
    let id = create_article(&app, "stable").await["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/articles/{id}"),
        Some(json!({"title": "changed", "body": "changed", "isApproved": "true"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", &format!("/articles/{id}"), None).await;
    assert_eq!(body["data"]["title"], "stable");
    assert_eq!(body["data"]["isApproved"], false);
}

#[tokio::test]
#[ignore = "requires database"]
async fn missing_records_are_not_found() {
    let (app, _pool) = live_app().await;

    for uri in ["/articles/-1", "/comments/-1"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Data tidak ditemukan!", "data": null}));

        let (status, _) = send(&app, "DELETE", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let (status, _) = send(
        &app,
        "PUT",
        "/articles/-1",
        Some(json!({"title": "t", "body": "b", "isApproved": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn comment_on_missing_article_creates_nothing() {
    let (app, pool) = live_app().await;

    let (before,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE article_id = -1")
        .fetch_one(&pool)
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/comments",
        Some(json!({"article_id": -1, "description": "orphan"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Article ID tidak ditemukan!"}));

    let (after,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE article_id = -1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
#[ignore = "requires database"]
async fn comment_embeds_its_article() {
    let (app, _pool) = live_app().await;
    let article = create_article(&app, "parent").await;
    let article_id = article["id"].as_i64().unwrap();
    let comment = create_comment(&app, article_id, "mantap").await;
    let comment_id = comment["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/comments/{comment_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["description"], "mantap");
    assert_eq!(body["data"]["article_id"], article_id);
    assert_eq!(body["data"]["article"], article);

    let (status, body) = send(&app, "GET", "/comments", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"].as_i64() == Some(comment_id))
        .cloned()
        .unwrap();
    assert_eq!(listed["article"]["title"], "parent");
}

#[tokio::test]
#[ignore = "requires database"]
async fn comment_update_to_missing_article_fails() {
    let (app, _pool) = live_app().await;
    let article_id = create_article(&app, "fk").await["id"].as_i64().unwrap();
    let comment_id = create_comment(&app, article_id, "x").await["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/comments/{comment_id}"),
        Some(json!({"article_id": -1, "description": "y"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Data gagal diubah!");

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/comments/{comment_id}"),
        Some(json!({"article_id": article_id, "description": "y"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["description"], "y");
}

#[tokio::test]
#[ignore = "requires database"]
async fn deleting_article_cascades_to_comments() {
    let (app, pool) = live_app().await;
    let article_id = create_article(&app, "doomed").await["id"].as_i64().unwrap();
    let first = create_comment(&app, article_id, "one").await["id"].as_i64().unwrap();
    let second = create_comment(&app, article_id, "two").await["id"].as_i64().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/articles/{article_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": format!("Data dengan ID {article_id} berhasil dihapus!")})
    );

    for id in [first, second] {
        let (status, _) = send(&app, "GET", &format!("/comments/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE article_id = $1")
        .bind(article_id as i32)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn comment_delete_and_missing_update() {
    let (app, _pool) = live_app().await;
    let article_id = create_article(&app, "komentar").await["id"].as_i64().unwrap();
    let comment_id = create_comment(&app, article_id, "hapus saya").await["id"]
        .as_i64()
        .unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/comments/{comment_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": format!("Data dengan ID {comment_id} berhasil dihapus!")})
    );

    let (status, _) = send(&app, "GET", &format!("/comments/{comment_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/comments/{comment_id}"),
        Some(json!({"article_id": article_id, "description": "terlambat"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Data tidak ditemukan!", "data": null}));
}
