//! Stockfolio Core - screen services and view-state stores.
//!
//! This crate reconciles remote state into per-screen snapshots. Each
//! screen has a service that orchestrates the primary fetches and the
//! per-item enrichment fan-out, and a store holding the snapshot the
//! renderer observes. All business logic stays server-side; everything
//! here is fetch, decode, and reconcile.

pub mod constants;
pub mod details;
pub mod errors;
pub mod home;
pub mod search;
pub mod store;
pub mod toast;
pub mod trading;

pub use errors::Error;
pub use errors::Result;

#[cfg(test)]
pub(crate) mod test_support;
