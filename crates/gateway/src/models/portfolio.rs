use serde::Deserialize;

use super::quote::Quote;

/// One owned position, keyed by `symbol`.
///
/// The backend transmits the numeric fields as strings. All arithmetic
/// goes through the `*_value()` helpers, which fall back to 0.0 on
/// malformed input so a bad row can never panic a calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioItem {
    /// Company display name
    pub name: String,
    /// Ticker symbol, the stable key for this entry
    pub symbol: String,
    /// Average cost per share, as transmitted
    pub buy_price: String,
    /// Shares owned, as transmitted
    pub quantity: String,
    /// Total cost basis, as transmitted
    pub buy_total: String,
    /// Live quote, patched in by enrichment after the list fetch
    #[serde(default)]
    pub quote: Option<Quote>,
}

impl PortfolioItem {
    /// Average cost per share, 0.0 when the wire value is unparseable.
    pub fn buy_price_value(&self) -> f64 {
        parse_or_zero(&self.buy_price)
    }

    /// Shares owned, 0.0 when the wire value is unparseable.
    pub fn quantity_value(&self) -> f64 {
        parse_or_zero(&self.quantity)
    }

    /// Total cost basis, 0.0 when the wire value is unparseable.
    pub fn buy_total_value(&self) -> f64 {
        parse_or_zero(&self.buy_total)
    }
}

fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}
