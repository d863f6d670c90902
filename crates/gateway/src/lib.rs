//! Typed HTTP bindings for the stocks backend.
//!
//! This crate is the only place that knows the backend's endpoint paths,
//! query parameters, and JSON payload shapes. It exposes:
//!
//! - [`StocksApi`]: the async trait every backend operation hangs off,
//!   the seam services and tests program against
//! - [`ApiClient`]: the reqwest-backed implementation
//! - [`models`]: the wire DTOs with their serde field renames
//! - [`GatewayError`]: the uniform error taxonomy (invalid request,
//!   transport, bad status, decode)
//!
//! Calls are stateless and single-attempt: no retries, no caching, no
//! shared state between requests. Higher layers decide what a failure
//! means for the screen.

pub mod client;
pub mod errors;
pub mod models;
pub mod traits;

pub use client::ApiClient;
pub use errors::GatewayError;
pub use traits::StocksApi;
