use serde::Deserialize;

use super::quote::Quote;

/// One tracked-but-not-owned symbol, keyed by `symbol`.
///
/// The list endpoint only guarantees `symbol`; `name` and `quote` are
/// patched in by per-item enrichment after the list fetch and stay `None`
/// for that screen visit if enrichment fails.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchlistItem {
    /// Ticker symbol, the stable key for this entry
    pub symbol: String,
    /// Company display name, filled in by enrichment
    #[serde(default)]
    pub name: Option<String>,
    /// Last price stored server-side, if any
    #[serde(default)]
    pub price: Option<f64>,
    /// Last change stored server-side, if any
    #[serde(default)]
    pub change: Option<f64>,
    /// Last percent change stored server-side, if any
    #[serde(default)]
    pub change_percent: Option<f64>,
    /// Live quote, filled in by enrichment
    #[serde(default)]
    pub quote: Option<Quote>,
}
