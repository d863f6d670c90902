use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

/// One news article for a symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsArticle {
    /// Backend-assigned article id
    pub id: i64,
    /// Publication time, unix seconds
    pub datetime: i64,
    /// Headline text
    pub headline: String,
    /// Preview image URL
    pub image: String,
    /// Publisher name
    pub source: String,
    /// Article summary
    pub summary: String,
    /// Article URL
    pub url: String,
}

impl NewsArticle {
    /// Publication time as a UTC timestamp. `None` when the wire value is
    /// out of the representable range.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.datetime, 0).single()
    }
}
