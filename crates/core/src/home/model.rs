//! Home screen snapshot and derived portfolio metrics.

use stockfolio_gateway::models::{PortfolioItem, Quote, WalletInfo, WatchlistItem};

/// Everything the home screen renders.
///
/// List entries are keyed by symbol; enrichment patches locate their
/// target by symbol equality, never index, so user reorders and removals
/// while fetches are in flight cannot misdirect a patch.
#[derive(Debug, Clone, Default)]
pub struct HomeSnapshot {
    /// Cash balance slot, empty until the wallet fetch lands
    pub wallet: Option<WalletInfo>,
    /// Owned positions
    pub portfolio: Vec<PortfolioItem>,
    /// Tracked symbols
    pub watchlist: Vec<WatchlistItem>,
    /// True from screen entry until all primary fetches settle
    pub is_loading: bool,
}

impl HomeSnapshot {
    pub fn set_wallet(&mut self, wallet: WalletInfo) {
        self.wallet = Some(wallet);
    }

    pub fn set_portfolio(&mut self, items: Vec<PortfolioItem>) {
        self.portfolio = items;
    }

    pub fn set_watchlist(&mut self, items: Vec<WatchlistItem>) {
        self.watchlist = items;
    }

    /// Replace one position's quote, located by symbol. No-op when the
    /// symbol has since been removed.
    pub fn patch_portfolio_quote(&mut self, symbol: &str, quote: Quote) {
        if let Some(item) = self.portfolio.iter_mut().find(|i| i.symbol == symbol) {
            item.quote = Some(quote);
        }
    }

    /// Replace one watchlist entry's quote, located by symbol.
    pub fn patch_watchlist_quote(&mut self, symbol: &str, quote: Quote) {
        if let Some(item) = self.watchlist.iter_mut().find(|i| i.symbol == symbol) {
            item.quote = Some(quote);
        }
    }

    /// Fill in one watchlist entry's display name, located by symbol.
    pub fn patch_watchlist_name(&mut self, symbol: &str, name: String) {
        if let Some(item) = self.watchlist.iter_mut().find(|i| i.symbol == symbol) {
            item.name = Some(name);
        }
    }

    /// Remove a position locally. Out-of-range is a no-op.
    pub fn remove_portfolio_item(&mut self, index: usize) -> Option<PortfolioItem> {
        if index < self.portfolio.len() {
            Some(self.portfolio.remove(index))
        } else {
            None
        }
    }

    /// Remove a watchlist entry locally. Out-of-range is a no-op.
    pub fn remove_watchlist_item(&mut self, index: usize) -> Option<WatchlistItem> {
        if index < self.watchlist.len() {
            Some(self.watchlist.remove(index))
        } else {
            None
        }
    }

    /// Reorder a position locally. Out-of-range is a no-op.
    pub fn move_portfolio_item(&mut self, from: usize, to: usize) {
        move_item(&mut self.portfolio, from, to);
    }

    /// Reorder a watchlist entry locally. Out-of-range is a no-op.
    pub fn move_watchlist_item(&mut self, from: usize, to: usize) {
        move_item(&mut self.watchlist, from, to);
    }

    /// Total net worth: cash balance plus the summed cost basis of every
    /// position. Cost basis, not live market value; rows with unparseable
    /// totals contribute 0.0.
    pub fn net_worth(&self) -> f64 {
        let cash = self.wallet.as_ref().map(|w| w.wallet).unwrap_or(0.0);
        let holdings: f64 = self.portfolio.iter().map(|i| i.buy_total_value()).sum();
        cash + holdings
    }
}

fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from < items.len() && to < items.len() {
        let item = items.remove(from);
        items.insert(to, item);
    }
}

/// Live valuation of one position, derived from its patched quote.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionMetrics {
    /// Quote price times shares owned
    pub current_value: f64,
    /// (quote price - average cost) times shares owned
    pub gain: f64,
    /// Gain per share as a percentage of the quote price
    pub gain_percent: f64,
}

/// Derived metrics for a position, or `None` while its quote is still
/// unpopulated (the renderer shows a loading placeholder).
pub fn position_metrics(item: &PortfolioItem) -> Option<PositionMetrics> {
    let quote = item.quote.as_ref()?;
    let quantity = item.quantity_value();
    let per_share = quote.c - item.buy_price_value();

    let gain_percent = if quote.c != 0.0 {
        (per_share / quote.c) * 100.0
    } else {
        0.0
    };

    Some(PositionMetrics {
        current_value: quote.c * quantity,
        gain: per_share * quantity,
        gain_percent,
    })
}
