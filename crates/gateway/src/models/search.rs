use serde::Deserialize;

/// Paged wrapper around symbol lookup results.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Matching symbols
    pub result: Vec<SymbolMatch>,
    /// Total match count reported by the backend
    pub count: usize,
}

/// One symbol lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolMatch {
    /// Full company description
    pub description: String,
    /// Display symbol; entries containing "." (foreign listings) are
    /// filtered out before results leave the gateway
    pub display_symbol: String,
    /// Symbol to use for follow-up calls
    pub symbol: String,
    /// Security type (e.g. "Common Stock", "ETF")
    #[serde(rename = "type")]
    pub security_type: String,
}
