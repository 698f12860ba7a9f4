use crate::domain::metadata::{NewsItem, StockSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicType {
    Company,
    Economy,
    Sector,
}

impl TopicType {
    pub fn title_suffix(self) -> &'static str {
        match self {
            TopicType::Company => "기업 분석",
            TopicType::Economy => "경제 분석",
            TopicType::Sector => "섹터 분석",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Opinion {
    Buy,
    #[default]
    Hold,
    Sell,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Swot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub opinion: Opinion,
    pub target_price: String,
    pub current_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upside: Option<String>,
    pub horizon: String,
    pub reason: String,
}

impl Recommendation {
    /// Structural default used for non-company topics and when the
    /// recommendation section is missing entirely.
    pub fn empty(horizon: &str) -> Self {
        Self {
            opinion: Opinion::Hold,
            target_price: "-".to_string(),
            current_price: "-".to_string(),
            upside: None,
            horizon: horizon.to_string(),
            reason: String::new(),
        }
    }
}

/// Display-formatted market figures derived from the metadata snapshot,
/// independent of any text extraction. Serializes as `{}` when nothing was
/// derivable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week52_high: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week52_low: Option<String>,
}

const TRILLION_KRW: f64 = 1_000_000_000_000.0;

impl StockMetrics {
    pub fn from_snapshot(snapshot: &StockSnapshot) -> Self {
        Self {
            per: snapshot.per.map(|v| format!("{v:.2}배")),
            eps: snapshot.eps.map(|v| format!("{}원", format_thousands(v.round() as i64))),
            market_cap: snapshot
                .market_cap
                .map(|v| format!("{:.1}조원", v / TRILLION_KRW)),
            week52_high: snapshot
                .week52_high
                .map(|v| format!("{}원", format_thousands(v.round() as i64))),
            week52_low: snapshot
                .week52_low
                .map(|v| format!("{}원", format_thousands(v.round() as i64))),
        }
    }
}

fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// The fully structured record produced once per generation call. Immutable
/// after assembly; every top-level field is present (empty defaults, never a
/// missing object), so it serializes directly for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedReport {
    pub title_suffix: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub swot: Swot,
    pub recommendation: Recommendation,
    pub risks: Vec<String>,
    pub sources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_analysis: Option<String>,
    pub stock_metrics: StockMetrics,
    pub news_items: Vec<NewsItem>,
    pub peer_stocks: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_heatmap: Option<serde_json::Value>,
    pub file_sources: Vec<String>,
    pub data_quality_score: Option<u8>,
    pub sentiment: Option<String>,
    pub news_count: Option<u32>,
    pub generated_at: Option<DateTime<Utc>>,
}
