//! Stock detail screen: company data, charts, news, insights, position,
//! and the trade/watchlist actions.

pub mod model;
pub mod service;


pub use model::DetailsSnapshot;
pub use service::DetailsService;
