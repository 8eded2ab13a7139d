//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use pressctl_server::db::migrations;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Drop existing tables first (deletes all data)
    #[arg(long)]
    pub reset: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.db.connect().await?;

    if args.reset {
        migrations::reset(&pool)
            .await
            .context("Failed to drop tables")?;
    }

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    println!("Migrations applied");
    Ok(())
}
