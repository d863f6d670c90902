//! Shared test fixtures and the in-memory backend mock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stockfolio_gateway::models::{
    CompanyDetails, CompanyInsights, CompanyProfile, HourlyChart, InsiderSentiments, NewsArticle,
    OhlcChart, PortfolioItem, Quote, SentimentSeries, SymbolMatch, TradeOrder, WalletInfo,
    WatchlistItem,
};
use stockfolio_gateway::{GatewayError, StocksApi};
use tokio::sync::Semaphore;

// =========================================================================
// Fixture builders
// =========================================================================

pub(crate) fn quote(c: f64) -> Quote {
    Quote {
        c,
        d: 1.0,
        dp: 0.5,
        h: c + 1.0,
        l: c - 1.0,
        o: c,
        pc: c - 1.0,
        t: "1704067200".to_string(),
    }
}

pub(crate) fn portfolio_item(
    symbol: &str,
    name: &str,
    buy_price: &str,
    quantity: &str,
    buy_total: &str,
) -> PortfolioItem {
    PortfolioItem {
        name: name.to_string(),
        symbol: symbol.to_string(),
        buy_price: buy_price.to_string(),
        quantity: quantity.to_string(),
        buy_total: buy_total.to_string(),
        quote: None,
    }
}

pub(crate) fn watchlist_item(symbol: &str) -> WatchlistItem {
    WatchlistItem {
        symbol: symbol.to_string(),
        name: None,
        price: None,
        change: None,
        change_percent: None,
        quote: None,
    }
}

pub(crate) fn company_details(symbol: &str, name: &str, price: f64) -> CompanyDetails {
    CompanyDetails {
        profile: CompanyProfile {
            exchange: "NASDAQ".to_string(),
            finnhub_industry: "Technology".to_string(),
            ipo: "1980-12-12".to_string(),
            logo: String::new(),
            ticker: symbol.to_string(),
            weburl: String::new(),
            name: name.to_string(),
        },
        quote: quote(price),
        peers: vec![symbol.to_string()],
    }
}

pub(crate) fn symbol_match(symbol: &str, description: &str) -> SymbolMatch {
    SymbolMatch {
        description: description.to_string(),
        display_symbol: symbol.to_string(),
        symbol: symbol.to_string(),
        security_type: "Common Stock".to_string(),
    }
}

pub(crate) fn news_article(id: i64, headline: &str) -> NewsArticle {
    NewsArticle {
        id,
        datetime: 1704067200,
        headline: headline.to_string(),
        image: String::new(),
        source: "Newswire".to_string(),
        summary: String::new(),
        url: String::new(),
    }
}

pub(crate) fn hourly_chart(symbol: &str) -> HourlyChart {
    HourlyChart {
        ticker: symbol.to_string(),
        time: vec![1704096000.0, 1704099600.0],
        stocks: vec![170.1, 171.0],
        chart_color: "green".to_string(),
    }
}

pub(crate) fn ohlc_chart(symbol: &str) -> OhlcChart {
    OhlcChart {
        ticker: symbol.to_string(),
        ohlc: vec![vec![1704067200000, 170, 173, 169, 171]],
    }
}

pub(crate) fn insights(symbol: &str) -> CompanyInsights {
    CompanyInsights {
        insider_sentiments: InsiderSentiments {
            avg_mspr: 10.0,
            positive_mspr: 20.0,
            negative_mspr: -5.0,
            avg_change: 100.0,
            positive_change: 300.0,
            negative_change: -100.0,
        },
        sentiments: SentimentSeries {
            data: vec![],
            symbol: symbol.to_string(),
        },
        recommendations: vec![],
        earnings: vec![],
    }
}

// =========================================================================
// Mock backend
// =========================================================================

/// In-memory `StocksApi` with per-operation failure toggles, call
/// recording, and an optional gate that holds company-details fetches
/// until the test releases permits.
#[derive(Clone, Default)]
pub(crate) struct MockApi {
    pub wallet: Arc<Mutex<Option<WalletInfo>>>,
    pub portfolio: Arc<Mutex<Vec<PortfolioItem>>>,
    pub watchlist: Arc<Mutex<Vec<WatchlistItem>>>,
    pub details: Arc<Mutex<HashMap<String, CompanyDetails>>>,
    pub news: Arc<Mutex<HashMap<String, Vec<NewsArticle>>>>,
    pub hourly: Arc<Mutex<HashMap<String, HourlyChart>>>,
    pub ohlc: Arc<Mutex<HashMap<String, OhlcChart>>>,
    pub insights: Arc<Mutex<HashMap<String, CompanyInsights>>>,
    pub search_results: Arc<Mutex<Vec<SymbolMatch>>>,

    pub fail_wallet: Arc<Mutex<bool>>,
    pub fail_portfolio: Arc<Mutex<bool>>,
    pub fail_watchlist: Arc<Mutex<bool>>,
    pub fail_remove: Arc<Mutex<bool>>,
    pub fail_search: Arc<Mutex<bool>>,
    pub fail_submit: Arc<Mutex<bool>>,

    pub added_symbols: Arc<Mutex<Vec<String>>>,
    pub removed_symbols: Arc<Mutex<Vec<String>>>,
    pub submitted_orders: Arc<Mutex<Vec<TradeOrder>>>,

    details_gate: Arc<Mutex<Option<Arc<Semaphore>>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_wallet(&self, amount: f64) {
        *self.wallet.lock().unwrap() = Some(WalletInfo {
            wallet: amount,
            flag: true,
        });
    }

    pub fn add_portfolio_item(&self, item: PortfolioItem) {
        self.portfolio.lock().unwrap().push(item);
    }

    pub fn add_watchlist_item(&self, item: WatchlistItem) {
        self.watchlist.lock().unwrap().push(item);
    }

    pub fn set_details(&self, symbol: &str, details: CompanyDetails) {
        self.details.lock().unwrap().insert(symbol.to_string(), details);
    }

    pub fn set_news(&self, symbol: &str, articles: Vec<NewsArticle>) {
        self.news.lock().unwrap().insert(symbol.to_string(), articles);
    }

    pub fn set_hourly(&self, symbol: &str, chart: HourlyChart) {
        self.hourly.lock().unwrap().insert(symbol.to_string(), chart);
    }

    pub fn set_ohlc(&self, symbol: &str, chart: OhlcChart) {
        self.ohlc.lock().unwrap().insert(symbol.to_string(), chart);
    }

    pub fn set_insights(&self, symbol: &str, value: CompanyInsights) {
        self.insights.lock().unwrap().insert(symbol.to_string(), value);
    }

    pub fn set_search_results(&self, results: Vec<SymbolMatch>) {
        *self.search_results.lock().unwrap() = results;
    }

    pub fn set_fail_wallet(&self, fail: bool) {
        *self.fail_wallet.lock().unwrap() = fail;
    }

    pub fn set_fail_portfolio(&self, fail: bool) {
        *self.fail_portfolio.lock().unwrap() = fail;
    }

    pub fn set_fail_watchlist(&self, fail: bool) {
        *self.fail_watchlist.lock().unwrap() = fail;
    }

    pub fn set_fail_remove(&self, fail: bool) {
        *self.fail_remove.lock().unwrap() = fail;
    }

    pub fn set_fail_search(&self, fail: bool) {
        *self.fail_search.lock().unwrap() = fail;
    }

    pub fn set_fail_submit(&self, fail: bool) {
        *self.fail_submit.lock().unwrap() = fail;
    }

    /// Hold every company-details fetch on a zero-permit semaphore.
    /// The test releases them with `add_permits`.
    pub fn gate_details(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.details_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    fn server_error() -> GatewayError {
        GatewayError::BadStatus { status: 500 }
    }
}

#[async_trait]
impl StocksApi for MockApi {
    async fn get_wallet(&self) -> Result<WalletInfo, GatewayError> {
        if *self.fail_wallet.lock().unwrap() {
            return Err(Self::server_error());
        }
        Ok(self
            .wallet
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(WalletInfo {
                wallet: 0.0,
                flag: false,
            }))
    }

    async fn get_watchlist(&self) -> Result<Vec<WatchlistItem>, GatewayError> {
        if *self.fail_watchlist.lock().unwrap() {
            return Err(Self::server_error());
        }
        Ok(self.watchlist.lock().unwrap().clone())
    }

    async fn get_portfolio(&self) -> Result<Vec<PortfolioItem>, GatewayError> {
        if *self.fail_portfolio.lock().unwrap() {
            return Err(Self::server_error());
        }
        Ok(self.portfolio.lock().unwrap().clone())
    }

    async fn get_position(&self, symbol: &str) -> Result<PortfolioItem, GatewayError> {
        self.portfolio
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.symbol == symbol)
            .cloned()
            .ok_or_else(|| GatewayError::Decode(format!("no position for {}", symbol)))
    }

    async fn add_to_watchlist(&self, symbol: &str) -> Result<(), GatewayError> {
        self.added_symbols.lock().unwrap().push(symbol.to_string());
        self.watchlist.lock().unwrap().push(watchlist_item(symbol));
        Ok(())
    }

    async fn remove_from_watchlist(
        &self,
        symbol: &str,
    ) -> Result<Vec<WatchlistItem>, GatewayError> {
        self.removed_symbols.lock().unwrap().push(symbol.to_string());
        if *self.fail_remove.lock().unwrap() {
            return Err(Self::server_error());
        }
        let mut watchlist = self.watchlist.lock().unwrap();
        watchlist.retain(|i| i.symbol != symbol);
        Ok(watchlist.clone())
    }

    async fn search_symbols(&self, _query: &str) -> Result<Vec<SymbolMatch>, GatewayError> {
        if *self.fail_search.lock().unwrap() {
            return Err(Self::server_error());
        }
        Ok(self.search_results.lock().unwrap().clone())
    }

    async fn get_company_details(&self, symbol: &str) -> Result<CompanyDetails, GatewayError> {
        let gate = self.details_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|_| GatewayError::Decode("gate closed".to_string()))?;
            permit.forget();
        }

        self.details
            .lock()
            .unwrap()
            .get(symbol)
            .cloned()
            .ok_or_else(|| GatewayError::Decode(format!("no details for {}", symbol)))
    }

    async fn get_company_news(&self, symbol: &str) -> Result<Vec<NewsArticle>, GatewayError> {
        self.news
            .lock()
            .unwrap()
            .get(symbol)
            .cloned()
            .ok_or_else(|| GatewayError::Decode(format!("no news for {}", symbol)))
    }

    async fn get_hourly_chart(&self, symbol: &str) -> Result<HourlyChart, GatewayError> {
        self.hourly
            .lock()
            .unwrap()
            .get(symbol)
            .cloned()
            .ok_or_else(|| GatewayError::Decode(format!("no hourly chart for {}", symbol)))
    }

    async fn get_ohlc_chart(&self, symbol: &str) -> Result<OhlcChart, GatewayError> {
        self.ohlc
            .lock()
            .unwrap()
            .get(symbol)
            .cloned()
            .ok_or_else(|| GatewayError::Decode(format!("no ohlc chart for {}", symbol)))
    }

    async fn get_insights(&self, symbol: &str) -> Result<CompanyInsights, GatewayError> {
        self.insights
            .lock()
            .unwrap()
            .get(symbol)
            .cloned()
            .ok_or_else(|| GatewayError::Decode(format!("no insights for {}", symbol)))
    }

    async fn submit_trade(&self, order: &TradeOrder) -> Result<(), GatewayError> {
        if *self.fail_submit.lock().unwrap() {
            return Err(Self::server_error());
        }
        self.submitted_orders.lock().unwrap().push(order.clone());
        Ok(())
    }
}
