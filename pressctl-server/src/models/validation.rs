//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Body is not JSON, or a field is missing or has the wrong type
    Body { reason: String },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body { reason } => write!(f, "invalid request body: {}", reason),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
