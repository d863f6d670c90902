//! Wire DTOs for the backend's JSON responses.
//!
//! Every struct here mirrors one backend payload shape exactly, with serde
//! attributes covering the wire field renames (`displaySymbol`,
//! `companyProfileData`, `surprisePercent`, ...). Fields the client fills
//! in after the initial fetch (`quote`, watchlist `name`) are
//! `#[serde(default)]` so list payloads decode without them.

pub mod chart;
pub mod company;
pub mod insights;
pub mod news;
pub mod portfolio;
pub mod quote;
pub mod search;
pub mod trade;
pub mod wallet;
pub mod watchlist;

pub use chart::{HourlyChart, OhlcChart};
pub use company::{CompanyDetails, CompanyProfile};
pub use insights::{
    CompanyInsights, EarningsSurprise, InsiderSentiments, RecommendationTrend, SentimentPoint,
    SentimentSeries,
};
pub use news::NewsArticle;
pub use portfolio::PortfolioItem;
pub use quote::Quote;
pub use search::{SearchResponse, SymbolMatch};
pub use trade::{TradeOrder, TradeSide};
pub use wallet::WalletInfo;
pub use watchlist::WatchlistItem;
