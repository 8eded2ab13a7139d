//! Database migrations for the articles and comments tables

use sqlx::PgPool;

use super::DbError;

/// Advisory lock key serialising concurrent migration runs
const MIGRATION_LOCK_KEY: i64 = 0x7072_6573_7363_746c;

/// Create all tables if they do not exist.
///
/// Runs in one transaction under an advisory lock, so concurrent callers
/// (several test binaries, several server instances) do not race on
/// `CREATE TABLE`.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running migrations...");

    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            is_approved BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id SERIAL PRIMARY KEY,
            article_id INTEGER NOT NULL
                REFERENCES articles(id) ON DELETE CASCADE ON UPDATE CASCADE,
            description VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_comments_article_id ON comments(article_id)")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!("Migrations complete");
    Ok(())
}

/// Drop all tables, children first.
pub async fn reset(pool: &PgPool) -> Result<(), DbError> {
    tracing::warn!("Dropping comments and articles tables");

    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DROP TABLE IF EXISTS comments")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS articles")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");

        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM information_schema.tables WHERE table_name = 'comments')",
        )
        .fetch_one(&pool)
        .await
        .expect("query failed");
        assert!(exists);
    }
}
