//! Home screen: wallet, portfolio, and watchlist.

pub mod model;
pub mod service;


pub use model::{HomeSnapshot, PositionMetrics};
pub use service::HomeService;
