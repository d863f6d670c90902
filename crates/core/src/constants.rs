//! Shared constants.

/// Maximum enrichment fetches in flight per list fan-out.
pub const MAX_CONCURRENT_ENRICHMENTS: usize = 16;

/// Default toast lifetime in seconds.
pub const DEFAULT_TOAST_SECS: u64 = 3;
