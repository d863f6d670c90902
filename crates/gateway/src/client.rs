//! HTTP implementation of the backend API.
//!
//! Every operation is one GET against the configured base URL. The backend
//! treats anything but HTTP 200 as failure, so the client does too. All
//! calls are single-attempt; there is no retry or caching layer here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::GatewayError;
use crate::models::{
    CompanyDetails, CompanyInsights, HourlyChart, NewsArticle, OhlcChart, PortfolioItem,
    SearchResponse, SymbolMatch, TradeOrder, WalletInfo, WatchlistItem,
};
use crate::traits::StocksApi;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the stocks backend.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given backend host.
    ///
    /// The base URL must be absolute (`http://` or `https://`); a trailing
    /// slash is stripped so endpoint paths can always start with `/`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/').to_string();

        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(GatewayError::InvalidRequest(format!(
                "base URL must be absolute: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            base_url: trimmed,
        })
    }

    /// Make a GET request; anything but HTTP 200 is a `BadStatus`.
    async fn send(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<reqwest::Response, GatewayError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.client.get(&url);
        for (key, value) in params {
            request = request.query(&[(key, value)]);
        }

        debug!("request: {} with {} params", endpoint, params.len());

        let response = request.send().await?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            warn!("request to {} failed: HTTP {}", endpoint, status);
            return Err(GatewayError::BadStatus {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Make a GET request and decode the JSON body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        let response = self.send(endpoint, params).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("failed to decode {} response: {}", endpoint, e);
            GatewayError::Decode(e.to_string())
        })
    }

    /// Make a GET request whose response body is ignored.
    async fn fetch_unit(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<(), GatewayError> {
        self.send(endpoint, params).await.map(|_| ())
    }
}

/// Drop foreign listings (dotted display symbols); the backend has no
/// data for them.
fn filter_foreign_listings(items: Vec<SymbolMatch>) -> Vec<SymbolMatch> {
    items
        .into_iter()
        .filter(|item| !item.display_symbol.contains('.'))
        .collect()
}

fn require_nonempty(name: &str, value: &str) -> Result<(), GatewayError> {
    if value.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(format!("empty {}", name)));
    }
    Ok(())
}

#[async_trait]
impl StocksApi for ApiClient {
    async fn get_wallet(&self) -> Result<WalletInfo, GatewayError> {
        self.fetch("/get_wallet_money", &[]).await
    }

    async fn get_watchlist(&self) -> Result<Vec<WatchlistItem>, GatewayError> {
        self.fetch("/select_data", &[]).await
    }

    async fn get_portfolio(&self) -> Result<Vec<PortfolioItem>, GatewayError> {
        self.fetch("/select_stock_data", &[]).await
    }

    async fn get_position(&self, symbol: &str) -> Result<PortfolioItem, GatewayError> {
        require_nonempty("symbol", symbol)?;
        self.fetch("/select_ticker_stock_data", &[("symbol", symbol)])
            .await
    }

    async fn add_to_watchlist(&self, symbol: &str) -> Result<(), GatewayError> {
        require_nonempty("symbol", symbol)?;
        self.fetch_unit("/insert_watchlist_data", &[("symbol", symbol)])
            .await
    }

    async fn remove_from_watchlist(
        &self,
        symbol: &str,
    ) -> Result<Vec<WatchlistItem>, GatewayError> {
        require_nonempty("symbol", symbol)?;
        self.fetch("/remove_data", &[("symbol", symbol)]).await
    }

    async fn search_symbols(&self, query: &str) -> Result<Vec<SymbolMatch>, GatewayError> {
        require_nonempty("query", query)?;

        let response: SearchResponse = self.fetch("/lookup_symbol", &[("q", query)]).await?;
        Ok(filter_foreign_listings(response.result))
    }

    async fn get_company_details(&self, symbol: &str) -> Result<CompanyDetails, GatewayError> {
        require_nonempty("symbol", symbol)?;
        self.fetch("/company_data", &[("symbol", symbol)]).await
    }

    async fn get_company_news(&self, symbol: &str) -> Result<Vec<NewsArticle>, GatewayError> {
        require_nonempty("symbol", symbol)?;
        self.fetch("/company_news", &[("symbol", symbol)]).await
    }

    async fn get_hourly_chart(&self, symbol: &str) -> Result<HourlyChart, GatewayError> {
        require_nonempty("symbol", symbol)?;
        self.fetch("/hourly_chart_data", &[("symbol", symbol)])
            .await
    }

    async fn get_ohlc_chart(&self, symbol: &str) -> Result<OhlcChart, GatewayError> {
        require_nonempty("symbol", symbol)?;
        self.fetch("/chart_data", &[("symbol", symbol)]).await
    }

    async fn get_insights(&self, symbol: &str) -> Result<CompanyInsights, GatewayError> {
        require_nonempty("symbol", symbol)?;
        self.fetch("/company_insights", &[("symbol", symbol)]).await
    }

    async fn submit_trade(&self, order: &TradeOrder) -> Result<(), GatewayError> {
        require_nonempty("ticker", &order.ticker)?;
        require_nonempty("quantity", &order.quantity)?;

        let price = order.price.to_string();
        let total = order.total.to_string();

        self.fetch_unit(
            "/insert_stock_data",
            &[
                ("ticker", order.ticker.as_str()),
                ("name", order.name.as_str()),
                ("price", price.as_str()),
                ("quantity", order.quantity.as_str()),
                ("total", total.as_str()),
                ("buyOrSell", order.side.as_str()),
            ],
        )
        .await
    }
}
