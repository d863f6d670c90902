//! Home screen orchestration.
//!
//! `load()` runs the three primary fetches concurrently, then fans out
//! one enrichment fetch per list item in the background. Enrichment is
//! fire-and-forget: the screen renders as patches land, and anything
//! still in flight when the screen is re-entered dies against the
//! generation guard.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use log::{debug, warn};
use stockfolio_gateway::models::CompanyDetails;
use stockfolio_gateway::StocksApi;

use crate::constants::MAX_CONCURRENT_ENRICHMENTS;
use crate::store::ScreenStore;

use super::model::HomeSnapshot;

pub struct HomeService {
    api: Arc<dyn StocksApi>,
    store: Arc<ScreenStore<HomeSnapshot>>,
}

impl HomeService {
    pub fn new(api: Arc<dyn StocksApi>) -> Self {
        Self {
            api,
            store: Arc::new(ScreenStore::new()),
        }
    }

    /// The store the renderer observes.
    pub fn store(&self) -> Arc<ScreenStore<HomeSnapshot>> {
        Arc::clone(&self.store)
    }

    pub fn snapshot(&self) -> HomeSnapshot {
        self.store.snapshot()
    }

    /// Load the screen: reset the store, run the wallet, portfolio, and
    /// watchlist fetches concurrently, then kick off per-item enrichment
    /// for both lists. Returns once the primary fetches settle; the
    /// loading flag clears at that point, enrichment keeps going in the
    /// background.
    pub async fn load(&self) {
        let generation = self.store.begin();
        self.store.apply(generation, |s| s.is_loading = true);

        let (wallet, portfolio, watchlist) = tokio::join!(
            self.api.get_wallet(),
            self.api.get_portfolio(),
            self.api.get_watchlist()
        );

        match wallet {
            Ok(info) => {
                self.store.apply(generation, |s| s.set_wallet(info));
            }
            Err(e) => warn!("wallet fetch failed: {}", e),
        }

        match portfolio {
            Ok(items) => {
                let symbols: Vec<String> = items.iter().map(|i| i.symbol.clone()).collect();
                self.store.apply(generation, |s| s.set_portfolio(items));
                self.spawn_enrichment(generation, symbols, |s, symbol, details| {
                    s.patch_portfolio_quote(symbol, details.quote);
                });
            }
            Err(e) => warn!("portfolio fetch failed: {}", e),
        }

        match watchlist {
            Ok(items) => {
                let symbols: Vec<String> = items.iter().map(|i| i.symbol.clone()).collect();
                self.store.apply(generation, |s| s.set_watchlist(items));
                self.spawn_enrichment(generation, symbols, |s, symbol, details| {
                    s.patch_watchlist_quote(symbol, details.quote);
                    s.patch_watchlist_name(symbol, details.profile.name);
                });
            }
            Err(e) => warn!("watchlist fetch failed: {}", e),
        }

        self.store.apply(generation, |s| s.is_loading = false);
    }

    /// Remove a position from the snapshot. Local only; the backend keeps
    /// the row.
    pub fn remove_portfolio_item(&self, index: usize) {
        self.store.update(|s| {
            s.remove_portfolio_item(index);
        });
    }

    /// Remove a watchlist entry. The snapshot updates immediately; the
    /// remote delete runs in the background and a failure there is only
    /// logged, never rolled back.
    pub fn remove_watchlist_item(&self, index: usize) {
        let mut removed = None;
        self.store.update(|s| removed = s.remove_watchlist_item(index));

        if let Some(item) = removed {
            let api = Arc::clone(&self.api);
            tokio::spawn(async move {
                if let Err(e) = api.remove_from_watchlist(&item.symbol).await {
                    warn!("remote watchlist delete for {} failed: {}", item.symbol, e);
                }
            });
        }
    }

    /// Reorder a position. Local only, never persisted.
    pub fn move_portfolio_item(&self, from: usize, to: usize) {
        self.store.update(|s| s.move_portfolio_item(from, to));
    }

    /// Reorder a watchlist entry. Local only, never persisted.
    pub fn move_watchlist_item(&self, from: usize, to: usize) {
        self.store.update(|s| s.move_watchlist_item(from, to));
    }

    /// Fan out one company-details fetch per symbol with bounded
    /// in-flight concurrency, patching the snapshot as each completes.
    fn spawn_enrichment(
        &self,
        generation: u64,
        symbols: Vec<String>,
        patch: fn(&mut HomeSnapshot, &str, CompanyDetails),
    ) {
        if symbols.is_empty() {
            return;
        }

        let api = Arc::clone(&self.api);
        let store = Arc::clone(&self.store);

        tokio::spawn(async move {
            let mut results = stream::iter(symbols.into_iter().map(|symbol| {
                let api = Arc::clone(&api);
                async move {
                    let result = api.get_company_details(&symbol).await;
                    (symbol, result)
                }
            }))
            .buffer_unordered(MAX_CONCURRENT_ENRICHMENTS);

            while let Some((symbol, result)) = results.next().await {
                match result {
                    Ok(details) => {
                        store.apply(generation, |s| patch(s, &symbol, details));
                    }
                    Err(e) => debug!("enrichment for {} failed: {}", symbol, e),
                }
            }
        });
    }
}
