//! Core error types.
//!
//! Most fetch failures never surface as errors: screen services catch
//! them at the service boundary, log, and leave the affected slot empty.
//! This type covers the paths that do propagate to the caller.

use stockfolio_gateway::GatewayError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Gateway operation failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
