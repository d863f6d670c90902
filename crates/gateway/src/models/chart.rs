use serde::Deserialize;

/// Intraday price series for the summary chart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyChart {
    /// Ticker symbol the series belongs to
    pub ticker: String,
    /// Sample timestamps, unix seconds
    pub time: Vec<f64>,
    /// Price at each sample
    pub stocks: Vec<f64>,
    /// Rendering hint from the backend ("green" or "red")
    pub chart_color: String,
}

/// Historical OHLC series for the candlestick chart.
///
/// Each row is `[timestamp_ms, open, high, low, close]` with prices
/// rounded to whole units by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcChart {
    /// Ticker symbol the series belongs to
    pub ticker: String,
    /// Candle rows
    pub ohlc: Vec<Vec<i64>>,
}
