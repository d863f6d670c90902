//! Symbol search screen.

pub mod model;
pub mod service;


pub use model::SearchSnapshot;
pub use service::SearchService;
