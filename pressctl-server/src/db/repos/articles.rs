//! Article repository
//!
//! Plain single-table CRUD. Updates and inserts use `RETURNING` so the
//! handler gets the stored row back without a second query.

use once_cell::sync::Lazy;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::DbError;
use crate::db::schema::ARTICLES;
use crate::models::{Article, ArticleDraft};

static LIST_SQL: Lazy<String> = Lazy::new(|| format!("{} ORDER BY id", ARTICLES.select()));

static GET_SQL: Lazy<String> = Lazy::new(|| format!("{} WHERE id = $1", ARTICLES.select()));

/// Article repository
pub struct ArticleRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArticleRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All articles, oldest first.
    pub async fn list(&self) -> Result<Vec<Article>, DbError> {
        let articles = sqlx::query_as::<_, Article>(LIST_SQL.as_str())
            .fetch_all(self.pool)
            .await?;

        tracing::debug!(count = articles.len(), "listed articles");
        Ok(articles)
    }

    pub async fn get(&self, id: i32) -> Result<Article, DbError> {
        sqlx::query_as::<_, Article>(GET_SQL.as_str())
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, draft: &ArticleDraft) -> Result<Article, DbError> {
        let article = sqlx::query_as::<_, Article>(
            r#"
            INSERT INTO articles (title, body, is_approved)
            VALUES ($1, $2, $3)
            RETURNING id, title, body, is_approved
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.body)
        .bind(draft.is_approved)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = article.id, "created article");
        Ok(article)
    }

    /// Replace all mutable fields and return the stored row.
    pub async fn update(&self, id: i32, draft: &ArticleDraft) -> Result<Article, DbError> {
        sqlx::query_as::<_, Article>(
            r#"
            UPDATE articles
            SET title = $1, body = $2, is_approved = $3
            WHERE id = $4
            RETURNING id, title, body, is_approved
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.body)
        .bind(draft.is_approved)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Delete an article. Its comments go with it (`ON DELETE CASCADE`).
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::debug!(id, "deleted article");
        Ok(())
    }
}

fn not_found(id: i32) -> DbError {
    DbError::NotFound {
        resource: "article",
        id: id.to_string(),
    }
}

/// Map an article whose columns are prefixed, as produced by
/// [`crate::db::schema::eager_select`].
pub(crate) fn article_from_prefixed_row(row: &PgRow, prefix: &str) -> Result<Article, sqlx::Error> {
    let col = |name: &str| format!("{prefix}{name}");

    Ok(Article {
        id: row.try_get(col("id").as_str())?,
        title: row.try_get(col("title").as_str())?,
        body: row.try_get(col("body").as_str())?,
        is_approved: row.try_get(col("is_approved").as_str())?,
    })
}
