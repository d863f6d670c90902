use serde::Deserialize;

use super::quote::Quote;

/// Merged payload from the company endpoint: profile, live quote, and
/// peer symbols in one response.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyDetails {
    /// Company profile
    #[serde(rename = "companyProfileData")]
    pub profile: CompanyProfile,
    /// Live quote snapshot
    #[serde(rename = "quotesData")]
    pub quote: Quote,
    /// Peer ticker symbols
    #[serde(rename = "peersData")]
    pub peers: Vec<String>,
}

/// Static company profile data.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Listing exchange
    pub exchange: String,
    /// Industry classification
    pub finnhub_industry: String,
    /// IPO date, as transmitted
    pub ipo: String,
    /// Logo image URL
    pub logo: String,
    /// Ticker symbol
    pub ticker: String,
    /// Company website URL
    pub weburl: String,
    /// Company display name
    pub name: String,
}
