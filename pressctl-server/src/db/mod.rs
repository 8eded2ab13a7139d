//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool passed explicitly - no global handle
//! - Eager relations load with a single JOIN - no N+1 queries
//! - Cascades live in the schema, not in application code
//! - Transactions for check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod seed;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
