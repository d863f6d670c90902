//! Symbol lookup orchestration.

use std::sync::Arc;

use log::warn;
use stockfolio_gateway::StocksApi;

use crate::store::ScreenStore;

use super::model::SearchSnapshot;

pub struct SearchService {
    api: Arc<dyn StocksApi>,
    store: Arc<ScreenStore<SearchSnapshot>>,
}

impl SearchService {
    pub fn new(api: Arc<dyn StocksApi>) -> Self {
        Self {
            api,
            store: Arc::new(ScreenStore::new()),
        }
    }

    /// The store the renderer observes.
    pub fn store(&self) -> Arc<ScreenStore<SearchSnapshot>> {
        Arc::clone(&self.store)
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.store.snapshot()
    }

    /// Run a lookup. An empty query clears the results; a failed fetch
    /// keeps the previous results on screen and is only logged.
    pub async fn search(&self, query: &str) {
        if query.trim().is_empty() {
            self.store.update(|s| {
                s.query.clear();
                s.results.clear();
            });
            return;
        }

        self.store.update(|s| s.query = query.to_string());

        match self.api.search_symbols(query).await {
            Ok(results) => {
                self.store.update(|s| s.results = results);
            }
            Err(e) => warn!("symbol lookup for '{}' failed: {}", query, e),
        }
    }
}
