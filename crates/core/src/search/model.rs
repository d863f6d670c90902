//! Search screen snapshot.

use stockfolio_gateway::models::SymbolMatch;

/// The query and its current matches.
#[derive(Debug, Clone, Default)]
pub struct SearchSnapshot {
    /// The query the results belong to
    pub query: String,
    /// Matches for the query, already filtered by the gateway
    pub results: Vec<SymbolMatch>,
}
