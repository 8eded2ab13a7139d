//! Comment repository
//!
//! Reads load the parent article through the `article` relation in one
//! JOIN. Creation checks the parent exists inside the same transaction as
//! the insert.

use once_cell::sync::Lazy;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::articles::article_from_prefixed_row;
use super::DbError;
use crate::db::schema::{self, related_column, COMMENTS, LOCAL_ALIAS};
use crate::models::{Comment, CommentWithArticle, NewComment};

const ARTICLE_RELATION: &str = "article";

static WITH_ARTICLE_SQL: Lazy<String> = Lazy::new(|| {
    schema::eager_select(&COMMENTS, ARTICLE_RELATION).expect("comments.article relation missing")
});

static LIST_SQL: Lazy<String> =
    Lazy::new(|| format!("{} ORDER BY {LOCAL_ALIAS}.id", WITH_ARTICLE_SQL.as_str()));

static GET_SQL: Lazy<String> =
    Lazy::new(|| format!("{} WHERE {LOCAL_ALIAS}.id = $1", WITH_ARTICLE_SQL.as_str()));

static ARTICLE_PREFIX: Lazy<String> = Lazy::new(|| related_column(ARTICLE_RELATION, ""));

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All comments with their articles, oldest first.
    pub async fn list(&self) -> Result<Vec<CommentWithArticle>, DbError> {
        let rows = sqlx::query(LIST_SQL.as_str()).fetch_all(self.pool).await?;

        let comments = rows
            .iter()
            .map(comment_with_article)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = comments.len(), "listed comments");
        Ok(comments)
    }

    pub async fn get(&self, id: i32) -> Result<CommentWithArticle, DbError> {
        let row = sqlx::query(GET_SQL.as_str())
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(comment_with_article(&row)?)
    }

    /// Insert a comment after confirming its article exists.
    ///
    /// Returns [`DbError::MissingReference`] and writes nothing when the
    /// article is absent.
    pub async fn create(&self, new: &NewComment) -> Result<Comment, DbError> {
        let mut tx = self.pool.begin().await?;

        let (article_exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM articles WHERE id = $1)")
                .bind(new.article_id)
                .fetch_one(&mut *tx)
                .await?;

        if !article_exists {
            return Err(DbError::MissingReference {
                resource: "article",
                id: new.article_id.to_string(),
            });
        }

        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (article_id, description)
            VALUES ($1, $2)
            RETURNING id, article_id, description
            "#,
        )
        .bind(new.article_id)
        .bind(new.description.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(id = comment.id, article_id = comment.article_id, "created comment");
        Ok(comment)
    }

    /// Replace all mutable fields and return the stored row.
    ///
    /// An unknown `article_id` surfaces as a foreign-key violation.
    pub async fn update(&self, id: i32, new: &NewComment) -> Result<Comment, DbError> {
        sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET article_id = $1, description = $2
            WHERE id = $3
            RETURNING id, article_id, description
            "#,
        )
        .bind(new.article_id)
        .bind(new.description.as_str())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::debug!(id, "deleted comment");
        Ok(())
    }
}

fn not_found(id: i32) -> DbError {
    DbError::NotFound {
        resource: "comment",
        id: id.to_string(),
    }
}

fn comment_with_article(row: &PgRow) -> Result<CommentWithArticle, sqlx::Error> {
    Ok(CommentWithArticle {
        comment: Comment {
            id: row.try_get("id")?,
            article_id: row.try_get("article_id")?,
            description: row.try_get("description")?,
        },
        article: article_from_prefixed_row(row, ARTICLE_PREFIX.as_str())?,
    })
}
