//! The backend API trait.
//!
//! Services depend on this trait rather than the concrete HTTP client so
//! tests can substitute an in-memory implementation.

use async_trait::async_trait;

use crate::errors::GatewayError;
use crate::models::{
    CompanyDetails, CompanyInsights, HourlyChart, NewsArticle, OhlcChart, PortfolioItem,
    SymbolMatch, TradeOrder, WalletInfo, WatchlistItem,
};

/// Typed bindings for every backend endpoint the app uses.
///
/// All operations are single-attempt and side-effect free on error: a
/// failed call leaves no partial state to clean up on the client.
#[async_trait]
pub trait StocksApi: Send + Sync {
    /// Fetch the user's cash balance.
    async fn get_wallet(&self) -> Result<WalletInfo, GatewayError>;

    /// Fetch the watchlist. The backend only guarantees `symbol` per row.
    async fn get_watchlist(&self) -> Result<Vec<WatchlistItem>, GatewayError>;

    /// Fetch all owned positions.
    async fn get_portfolio(&self) -> Result<Vec<PortfolioItem>, GatewayError>;

    /// Fetch one owned position by symbol. The backend returns an
    /// undecodable body when the symbol is not held, which surfaces as a
    /// `Decode` error.
    async fn get_position(&self, symbol: &str) -> Result<PortfolioItem, GatewayError>;

    /// Add a symbol to the watchlist.
    async fn add_to_watchlist(&self, symbol: &str) -> Result<(), GatewayError>;

    /// Remove a symbol from the watchlist. The backend echoes the updated
    /// list back.
    async fn remove_from_watchlist(
        &self,
        symbol: &str,
    ) -> Result<Vec<WatchlistItem>, GatewayError>;

    /// Look up symbols matching a free-text query. Foreign listings
    /// (display symbols containing ".") are filtered out.
    async fn search_symbols(&self, query: &str) -> Result<Vec<SymbolMatch>, GatewayError>;

    /// Fetch profile, quote, and peers for a symbol in one call.
    async fn get_company_details(&self, symbol: &str) -> Result<CompanyDetails, GatewayError>;

    /// Fetch recent news for a symbol.
    async fn get_company_news(&self, symbol: &str) -> Result<Vec<NewsArticle>, GatewayError>;

    /// Fetch the intraday price series for a symbol.
    async fn get_hourly_chart(&self, symbol: &str) -> Result<HourlyChart, GatewayError>;

    /// Fetch the historical OHLC series for a symbol.
    async fn get_ohlc_chart(&self, symbol: &str) -> Result<OhlcChart, GatewayError>;

    /// Fetch insider sentiment, recommendations, and earnings for a symbol.
    async fn get_insights(&self, symbol: &str) -> Result<CompanyInsights, GatewayError>;

    /// Record an executed trade. The backend adjusts the wallet and the
    /// position rows server-side.
    async fn submit_trade(&self, order: &TradeOrder) -> Result<(), GatewayError>;
}
