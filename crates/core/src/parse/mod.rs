pub mod list;
pub mod recommendation;
pub mod section;
pub mod sources;
pub mod swot;

use crate::domain::metadata::MetadataBundle;
use crate::domain::report::{ParsedReport, Recommendation, StockMetrics, Swot, TopicType};
use crate::parse::section::DocumentIndex;
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_HORIZON: &str = "12개월";

/// Single placeholder item substituted when key points or risks come back
/// empty, so the consumer renders "pending" instead of a blank section.
pub const PENDING_PLACEHOLDER: &str = "분석 내용을 준비 중입니다.";

// Section heading keywords. Matching is keyword-based against the heading
// index; stated ordinals and heading order carry no meaning.
static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new("요약").expect("summary regex"));
static KEY_POINTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new("핵심").expect("key points regex"));
static SWOT_RE: Lazy<Regex> = Lazy::new(|| Regex::new("(?i)SWOT").expect("swot regex"));
static RISKS_RE: Lazy<Regex> = Lazy::new(|| Regex::new("리스크").expect("risks regex"));
static RECOMMENDATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"투자\s*의견").expect("recommendation regex"));
static ADDITIONAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"추가\s*분석").expect("additional regex"));

#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub horizon: String,
    pub max_key_points: usize,
    pub max_risks: usize,
    pub min_item_chars: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON.to_string(),
            max_key_points: list::DEFAULT_MAX_ITEMS,
            max_risks: list::DEFAULT_MAX_ITEMS,
            min_item_chars: list::DEFAULT_MIN_CHARS,
        }
    }
}

pub fn assemble(raw_text: &str, topic: TopicType, metadata: &MetadataBundle) -> ParsedReport {
    assemble_with(raw_text, topic, metadata, &ParseOptions::default())
}

/// Converts a free-form LLM report into the structured record. Total and
/// deterministic: malformed or empty text degrades to empty defaults,
/// never an error.
pub fn assemble_with(
    raw_text: &str,
    topic: TopicType,
    metadata: &MetadataBundle,
    options: &ParseOptions,
) -> ParsedReport {
    let index = DocumentIndex::parse(raw_text);

    let summary = index
        .section(&SUMMARY_RE)
        .map(|body| body.trim().to_string())
        .unwrap_or_default();
    if summary.is_empty() {
        tracing::debug!(topic = ?topic, "summary section missing or empty");
    }

    let sources = sources::extract_sources(raw_text);

    let additional_analysis = index
        .section(&ADDITIONAL_RE)
        .map(|body| body.trim().to_string())
        .filter(|body| !body.is_empty());

    let key_points = index
        .section(&KEY_POINTS_RE)
        .map(|body| list::extract_list_items(body, options.max_key_points, options.min_item_chars))
        .unwrap_or_default();

    // SWOT and the recommendation are gated on the topic type, not on the
    // presence of their headings.
    let (swot, recommendation) = if topic == TopicType::Company {
        let swot = index
            .section(&SWOT_RE)
            .map(swot::extract_swot)
            .unwrap_or_default();
        let recommendation = index
            .section(&RECOMMENDATION_RE)
            .map(|body| recommendation::extract_recommendation(body, &options.horizon))
            .unwrap_or_else(|| Recommendation::empty(&options.horizon));
        (swot, recommendation)
    } else {
        (Swot::default(), Recommendation::empty(&options.horizon))
    };

    let risks = index
        .section(&RISKS_RE)
        .map(|body| list::extract_list_items(body, options.max_risks, options.min_item_chars))
        .unwrap_or_default();

    let stock_metrics = match (topic, metadata.stock_data.as_ref()) {
        (TopicType::Company, Some(snapshot)) => StockMetrics::from_snapshot(snapshot),
        _ => StockMetrics::default(),
    };

    ParsedReport {
        title_suffix: topic.title_suffix().to_string(),
        summary,
        key_points: or_pending(key_points),
        swot,
        recommendation,
        risks: or_pending(risks),
        sources,
        additional_analysis,
        stock_metrics,
        news_items: metadata.news_items.clone(),
        peer_stocks: metadata.peer_stocks.clone(),
        sector_heatmap: metadata.sector_heatmap.clone(),
        file_sources: metadata.file_sources.clone(),
        data_quality_score: metadata.data_quality_score,
        sentiment: metadata.sentiment.clone(),
        news_count: metadata.news_count,
        generated_at: metadata.generated_at,
    }
}

// Post-processing kept separate from extraction so "genuinely empty" stays
// observable up to this point.
fn or_pending(items: Vec<String>) -> Vec<String> {
    if items.is_empty() {
        vec![PENDING_PLACEHOLDER.to_string()]
    } else {
        items
    }
}
