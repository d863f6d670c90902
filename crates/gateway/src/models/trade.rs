use std::fmt;

use serde::Serialize;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Wire token the trade endpoint expects for this side.
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated trade to submit.
///
/// `quantity` stays a string because the backend stores and echoes it back
/// verbatim in portfolio rows.
#[derive(Debug, Clone, Serialize)]
pub struct TradeOrder {
    /// Ticker symbol being traded
    pub ticker: String,
    /// Company display name, stored alongside the position
    pub name: String,
    /// Execution price per share
    pub price: f64,
    /// Shares traded, as entered
    pub quantity: String,
    /// Total notional (price times quantity)
    pub total: f64,
    /// Buy or sell
    pub side: TradeSide,
}
