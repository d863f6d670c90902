//! Detail screen snapshot.

use stockfolio_gateway::models::{
    CompanyDetails, CompanyInsights, HourlyChart, NewsArticle, OhlcChart, PortfolioItem,
    WalletInfo,
};

/// Everything the detail screen renders for one symbol.
///
/// Each slot fills independently as its fetch resolves; a failed fetch
/// leaves its slot empty for this visit while the rest of the screen
/// renders. Revisiting the screen re-fetches everything.
#[derive(Debug, Clone, Default)]
pub struct DetailsSnapshot {
    /// The symbol this visit is about
    pub symbol: String,
    /// Profile, live quote, and peers
    pub company: Option<CompanyDetails>,
    /// Recent news articles
    pub news: Vec<NewsArticle>,
    /// Intraday price series
    pub hourly_chart: Option<HourlyChart>,
    /// Historical candles
    pub ohlc_chart: Option<OhlcChart>,
    /// Sentiment, recommendations, earnings
    pub insights: Option<CompanyInsights>,
    /// The user's position in this symbol, `None` when not held
    pub position: Option<PortfolioItem>,
    /// Cash balance, shown in the trade sheet
    pub wallet: Option<WalletInfo>,
    /// Watchlist membership
    pub in_watchlist: bool,
    /// True from screen entry until every fetch settles
    pub is_loading: bool,
}

impl DetailsSnapshot {
    /// Shares currently owned, 0.0 when the symbol is not held.
    pub fn shares_owned(&self) -> f64 {
        self.position
            .as_ref()
            .map(|p| p.quantity_value())
            .unwrap_or(0.0)
    }

    /// The live price, once the company fetch has landed.
    pub fn current_price(&self) -> Option<f64> {
        self.company.as_ref().map(|c| c.quote.c)
    }

    /// Cash available to trade with, 0.0 until the wallet fetch lands.
    pub fn available_funds(&self) -> f64 {
        self.wallet.as_ref().map(|w| w.wallet).unwrap_or(0.0)
    }
}
