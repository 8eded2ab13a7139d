//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON envelopes for every response

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;

pub use error::{during, Action, ApiError};
pub use response::Envelope;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
