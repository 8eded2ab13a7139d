//! Sample data command

use anyhow::{Context, Result};
use clap::Parser;

use pressctl_server::db::{migrations, seed};

use super::DatabaseArgs;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let pool = args.db.connect().await?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let report = seed::run(&pool).await.context("Failed to seed database")?;

    println!(
        "Seeded {} new articles and {} comments",
        report.articles, report.comments
    );
    Ok(())
}
