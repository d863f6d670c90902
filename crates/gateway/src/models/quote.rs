use serde::{Deserialize, Serialize};

/// Price snapshot for one symbol, as served by the backend's merged
/// company endpoint.
///
/// A quote is ephemeral: it is always replaced wholesale when a newer one
/// arrives, never merged field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Current price
    pub c: f64,
    /// Change since previous close
    pub d: f64,
    /// Percent change since previous close
    pub dp: f64,
    /// High price of the day
    pub h: f64,
    /// Low price of the day
    pub l: f64,
    /// Open price of the day
    pub o: f64,
    /// Previous close price
    pub pc: f64,
    /// Quote timestamp, transmitted as a string
    pub t: String,
}
