//! Sample data for local development

use sqlx::PgPool;

use super::DbError;

const SAMPLE_ARTICLES: &[(&str, &str, bool)] = &[
    ("Belajar Rust", "Ownership, borrowing dan lifetimes.", true),
    ("Mengenal Axum", "Routing dan extractor di Axum.", true),
    ("SQL dengan sqlx", "Query async ke PostgreSQL.", false),
];

const SAMPLE_COMMENT: &str = "lorem ipsum doler";

/// Rows written by [`run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Sample articles inserted; ones already present are reused
    pub articles: usize,
    pub comments: usize,
}

/// Replace all comments with one sample comment per sample article.
///
/// Existing comments are deleted first. Articles are never deleted: a
/// sample article whose title already exists is reused, so seeding twice
/// does not duplicate them. Runs in a single transaction.
pub async fn run(pool: &PgPool) -> Result<SeedReport, DbError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM comments").execute(&mut *tx).await?;

    let mut report = SeedReport {
        articles: 0,
        comments: 0,
    };

    for &(title, body, is_approved) in SAMPLE_ARTICLES {
        let existing: Option<(i32,)> =
            sqlx::query_as("SELECT id FROM articles WHERE title = $1 ORDER BY id LIMIT 1")
                .bind(title)
                .fetch_optional(&mut *tx)
                .await?;

        let article_id = match existing {
            Some((id,)) => id,
            None => {
                let (id,): (i32,) = sqlx::query_as(
                    "INSERT INTO articles (title, body, is_approved) VALUES ($1, $2, $3) RETURNING id",
                )
                .bind(title)
                .bind(body)
                .bind(is_approved)
                .fetch_one(&mut *tx)
                .await?;
                report.articles += 1;
                id
            }
        };

        sqlx::query("INSERT INTO comments (article_id, description) VALUES ($1, $2)")
            .bind(article_id)
            .bind(SAMPLE_COMMENT)
            .execute(&mut *tx)
            .await?;
        report.comments += 1;
    }

    tx.commit().await?;

    tracing::info!(
        articles = report.articles,
        comments = report.comments,
        "Seeded database"
    );
    Ok(report)
}
