pub mod migrate;
pub mod seed;
pub mod serve;

pub use migrate::run_migrate;
pub use seed::run_seed;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;
use pressctl_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS};
use pressctl_server::PgPool;

/// Database connection arguments shared by all subcommands
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum connections in the pool
    #[arg(long, env = "PRESSCTL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub async fn connect(&self) -> Result<PgPool> {
        create_pool_with_options(&self.database_url, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
