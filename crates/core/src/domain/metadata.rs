use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Side-channel bundle produced by the generation orchestrator alongside the
/// raw report text. Every field is optional; the parser merges the bundle
/// into the output verbatim and never validates its internal consistency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataBundle {
    pub stock_data: Option<StockSnapshot>,
    pub data_quality_score: Option<u8>,
    pub news_count: Option<u32>,
    pub sentiment: Option<String>,
    pub news_items: Vec<NewsItem>,
    pub peer_stocks: Vec<serde_json::Value>,
    pub sector_heatmap: Option<serde_json::Value>,
    pub file_sources: Vec<String>,
    pub generated_at: Option<DateTime<Utc>>,
}

/// Raw market snapshot for the analyzed company. Prices and market cap are
/// in KRW.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StockSnapshot {
    pub per: Option<f64>,
    pub eps: Option<f64>,
    pub market_cap: Option<f64>,
    pub week52_high: Option<f64>,
    pub week52_low: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub date: Option<String>,
    pub relevance: Option<f64>,
}
