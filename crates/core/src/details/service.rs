//! Detail screen orchestration: independent slot fetches, the watchlist
//! toggle, and trade submission.

use std::sync::Arc;

use log::{debug, warn};
use stockfolio_gateway::models::{TradeOrder, TradeSide};
use stockfolio_gateway::StocksApi;

use crate::errors::{Error, Result};
use crate::store::ScreenStore;
use crate::toast::{Toast, ToastState};
use crate::trading;

use super::model::DetailsSnapshot;

pub struct DetailsService {
    api: Arc<dyn StocksApi>,
    store: Arc<ScreenStore<DetailsSnapshot>>,
    toasts: Arc<ToastState>,
}

impl DetailsService {
    pub fn new(api: Arc<dyn StocksApi>, toasts: Arc<ToastState>) -> Self {
        Self {
            api,
            store: Arc::new(ScreenStore::new()),
            toasts,
        }
    }

    /// The store the renderer observes.
    pub fn store(&self) -> Arc<ScreenStore<DetailsSnapshot>> {
        Arc::clone(&self.store)
    }

    pub fn snapshot(&self) -> DetailsSnapshot {
        self.store.snapshot()
    }

    /// Load the screen for a symbol: reset the store and run every slot
    /// fetch concurrently, with no ordering dependency between them. Each
    /// slot fills as its fetch resolves; failures leave the slot empty.
    /// The loading flag clears only once all fetches settle.
    pub async fn load(&self, symbol: &str) {
        let generation = self.store.begin();
        let symbol = symbol.to_string();
        self.store.apply(generation, |s| {
            s.symbol = symbol.clone();
            s.is_loading = true;
        });

        let company = async {
            match self.api.get_company_details(&symbol).await {
                Ok(details) => {
                    self.store.apply(generation, |s| s.company = Some(details));
                }
                Err(e) => debug!("company details for {} failed: {}", symbol, e),
            }
        };

        let news = async {
            match self.api.get_company_news(&symbol).await {
                Ok(articles) => {
                    self.store.apply(generation, |s| s.news = articles);
                }
                Err(e) => debug!("news for {} failed: {}", symbol, e),
            }
        };

        let hourly = async {
            match self.api.get_hourly_chart(&symbol).await {
                Ok(chart) => {
                    self.store.apply(generation, |s| s.hourly_chart = Some(chart));
                }
                Err(e) => debug!("hourly chart for {} failed: {}", symbol, e),
            }
        };

        let ohlc = async {
            match self.api.get_ohlc_chart(&symbol).await {
                Ok(chart) => {
                    self.store.apply(generation, |s| s.ohlc_chart = Some(chart));
                }
                Err(e) => debug!("ohlc chart for {} failed: {}", symbol, e),
            }
        };

        let insights = async {
            match self.api.get_insights(&symbol).await {
                Ok(value) => {
                    self.store.apply(generation, |s| s.insights = Some(value));
                }
                Err(e) => debug!("insights for {} failed: {}", symbol, e),
            }
        };

        // The backend has no "not held" answer; an undecodable body is the
        // normal response for a symbol without a position.
        let position = async {
            match self.api.get_position(&symbol).await {
                Ok(item) => {
                    self.store.apply(generation, |s| s.position = Some(item));
                }
                Err(e) => debug!("no position for {}: {}", symbol, e),
            }
        };

        let membership = async {
            match self.api.get_watchlist().await {
                Ok(items) => {
                    let tracked = items.iter().any(|i| i.symbol == symbol);
                    self.store.apply(generation, |s| s.in_watchlist = tracked);
                }
                Err(e) => debug!("watchlist check for {} failed: {}", symbol, e),
            }
        };

        let wallet = async {
            match self.api.get_wallet().await {
                Ok(info) => {
                    self.store.apply(generation, |s| s.wallet = Some(info));
                }
                Err(e) => debug!("wallet fetch failed: {}", e),
            }
        };

        tokio::join!(
            company, news, hourly, ohlc, insights, position, membership, wallet
        );

        self.store.apply(generation, |s| s.is_loading = false);
    }

    /// Flip watchlist membership. The snapshot and toast update
    /// immediately; the remote add/remove runs in the background and a
    /// failure there is only logged.
    pub fn toggle_watchlist(&self) {
        let snapshot = self.store.snapshot();
        let symbol = snapshot.symbol;
        if symbol.is_empty() {
            return;
        }

        let adding = !snapshot.in_watchlist;
        self.store.update(|s| s.in_watchlist = adding);

        let message = if adding {
            format!("Adding {} to Favorites", symbol)
        } else {
            format!("Removing {} from Favorites", symbol)
        };
        self.toasts.show(Toast::new(message));

        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            let result = if adding {
                api.add_to_watchlist(&symbol).await
            } else {
                api.remove_from_watchlist(&symbol).await.map(|_| ())
            };
            if let Err(e) = result {
                warn!("watchlist update for {} failed: {}", symbol, e);
            }
        });
    }

    /// Validate and submit a trade at the current quote price.
    ///
    /// Returns `Ok(false)` when validation rejects the trade; the
    /// rejection surfaces as a toast, never an error. On a submitted
    /// trade the wallet and position slots refresh before returning.
    pub async fn submit_trade(&self, quantity_text: &str, side: TradeSide) -> Result<bool> {
        let snapshot = self.store.snapshot();
        let price = snapshot
            .current_price()
            .ok_or_else(|| Error::Validation(format!("no quote loaded for {}", snapshot.symbol)))?;

        let trade = match trading::validate(
            quantity_text,
            side,
            price,
            snapshot.available_funds(),
            snapshot.shares_owned(),
        ) {
            Ok(trade) => trade,
            Err(rejection) => {
                self.toasts.show(rejection.toast());
                return Ok(false);
            }
        };

        let name = snapshot
            .company
            .as_ref()
            .map(|c| c.profile.name.clone())
            .unwrap_or_default();
        let order = TradeOrder {
            ticker: snapshot.symbol.clone(),
            name,
            price,
            quantity: quantity_text.trim().to_string(),
            total: trade.total,
            side,
        };

        self.api.submit_trade(&order).await?;
        self.refresh_after_trade(&order.ticker).await;
        Ok(true)
    }

    /// Re-fetch the slots a trade changes server-side.
    async fn refresh_after_trade(&self, symbol: &str) {
        let generation = self.store.generation();

        match self.api.get_wallet().await {
            Ok(info) => {
                self.store.apply(generation, |s| s.wallet = Some(info));
            }
            Err(e) => debug!("wallet refresh failed: {}", e),
        }

        match self.api.get_position(symbol).await {
            Ok(item) => {
                self.store.apply(generation, |s| s.position = Some(item));
            }
            // Position fully sold: the backend no longer has a row
            Err(_) => {
                self.store.apply(generation, |s| s.position = None);
            }
        }
    }
}
