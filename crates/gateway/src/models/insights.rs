use serde::Deserialize;

/// Merged payload from the insights endpoint: insider sentiment, social
/// sentiment history, analyst recommendations, and earnings surprises.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyInsights {
    /// Aggregated insider sentiment totals
    #[serde(rename = "insiderSentiments")]
    pub insider_sentiments: InsiderSentiments,
    /// Monthly sentiment history
    #[serde(rename = "sentimentsData")]
    pub sentiments: SentimentSeries,
    /// Analyst recommendation trends, newest first
    #[serde(rename = "recommendationsData")]
    pub recommendations: Vec<RecommendationTrend>,
    /// Quarterly earnings surprises
    #[serde(rename = "earningsData")]
    pub earnings: Vec<EarningsSurprise>,
}

/// Insider sentiment aggregates over the reporting window.
#[derive(Debug, Clone, Deserialize)]
pub struct InsiderSentiments {
    #[serde(rename = "avg_mspr")]
    pub avg_mspr: f64,
    #[serde(rename = "positive_mspr")]
    pub positive_mspr: f64,
    #[serde(rename = "negative_mspr")]
    pub negative_mspr: f64,
    #[serde(rename = "avg_change")]
    pub avg_change: f64,
    #[serde(rename = "positive_change")]
    pub positive_change: f64,
    #[serde(rename = "negative_change")]
    pub negative_change: f64,
}

/// Monthly sentiment points for one symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentSeries {
    pub data: Vec<SentimentPoint>,
    pub symbol: String,
}

/// One month of insider sentiment.
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentPoint {
    pub symbol: String,
    pub year: i32,
    pub month: u32,
    pub change: f64,
    pub mspr: f64,
}

/// Analyst recommendation counts for one period.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationTrend {
    pub buy: u32,
    pub hold: u32,
    pub period: String,
    pub sell: u32,
    #[serde(rename = "strongBuy")]
    pub strong_buy: u32,
    #[serde(rename = "strongSell")]
    pub strong_sell: u32,
    pub symbol: String,
}

/// One quarter's earnings against the consensus estimate.
#[derive(Debug, Clone, Deserialize)]
pub struct EarningsSurprise {
    pub actual: f64,
    pub estimate: f64,
    pub period: String,
    pub quarter: u32,
    pub surprise: f64,
    #[serde(rename = "surprisePercent")]
    pub surprise_percent: f64,
    pub symbol: String,
    pub year: i32,
}
