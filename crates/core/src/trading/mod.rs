//! Client-side trade validation.
//!
//! The backend applies trades without checks, so the client validates
//! before submitting. Rejections are user-facing messages surfaced as
//! toasts, never errors.

use std::time::Duration;

use stockfolio_gateway::models::TradeSide;

use crate::toast::Toast;

/// Why a trade was not submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum TradeRejection {
    /// Quantity text did not parse as a number
    InvalidAmount,
    /// Parsed quantity was zero or negative
    NonPositiveShares(TradeSide),
    /// Buy total exceeds the cash balance
    InsufficientFunds,
    /// Sell quantity exceeds the shares owned
    InsufficientShares,
}

impl TradeRejection {
    /// The message shown to the user.
    pub fn message(&self) -> String {
        match self {
            TradeRejection::InvalidAmount => "Please enter a valid amount".to_string(),
            TradeRejection::NonPositiveShares(side) => {
                format!("Cannot {} non-positive shares", side)
            }
            TradeRejection::InsufficientFunds => "Not enough money to buy".to_string(),
            TradeRejection::InsufficientShares => "Not enough shares to sell".to_string(),
        }
    }

    /// The rejection as a toast. Balance rejections use the shorter
    /// lifetime the trade sheet always used for them.
    pub fn toast(&self) -> Toast {
        match self {
            TradeRejection::InvalidAmount | TradeRejection::NonPositiveShares(_) => {
                Toast::new(self.message())
            }
            TradeRejection::InsufficientFunds | TradeRejection::InsufficientShares => {
                Toast::with_duration(self.message(), Duration::from_secs(2))
            }
        }
    }
}

/// A trade that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTrade {
    /// Parsed share count
    pub quantity: f64,
    /// Notional value at the given price
    pub total: f64,
}

/// Validate a trade before submission.
///
/// `quantity_text` is the user's raw input; `price` is the execution
/// price per share; `wallet` is the available cash; `shares_owned` is
/// the current position size (0.0 when the symbol is not held).
pub fn validate(
    quantity_text: &str,
    side: TradeSide,
    price: f64,
    wallet: f64,
    shares_owned: f64,
) -> Result<ValidatedTrade, TradeRejection> {
    let quantity: f64 = quantity_text
        .trim()
        .parse()
        .map_err(|_| TradeRejection::InvalidAmount)?;

    if !quantity.is_finite() {
        return Err(TradeRejection::InvalidAmount);
    }
    if quantity <= 0.0 {
        return Err(TradeRejection::NonPositiveShares(side));
    }

    let total = quantity * price;

    match side {
        TradeSide::Buy => {
            if total > wallet {
                return Err(TradeRejection::InsufficientFunds);
            }
        }
        TradeSide::Sell => {
            if quantity > shares_owned {
                return Err(TradeRejection::InsufficientShares);
            }
        }
    }

    Ok(ValidatedTrade { quantity, total })
}
