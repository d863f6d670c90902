use serde::Deserialize;

/// Cash balance payload from the wallet endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletInfo {
    /// Available cash balance
    pub wallet: f64,
    /// Server-side bookkeeping flag, carried through but unused by clients
    pub flag: bool,
}
