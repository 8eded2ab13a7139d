//! pressctl-server: articles and comments over HTTP
//!
//! A small REST surface backed by PostgreSQL. Handlers live in [`http`],
//! SQL in [`db`], and request/record types in [`models`].

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use sqlx::PgPool;
