use crate::domain::report::Swot;
use crate::parse::list::{extract_list_items, DEFAULT_MIN_CHARS};
use crate::parse::section::DocumentIndex;
use once_cell::sync::Lazy;
use regex::Regex;

pub const SWOT_MAX_ITEMS: usize = 3;

static STRENGTHS_RE: Lazy<Regex> = Lazy::new(|| Regex::new("강점").expect("strengths regex"));
static WEAKNESSES_RE: Lazy<Regex> = Lazy::new(|| Regex::new("약점").expect("weaknesses regex"));
static OPPORTUNITIES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("기회").expect("opportunities regex"));
static THREATS_RE: Lazy<Regex> = Lazy::new(|| Regex::new("위협").expect("threats regex"));

/// Extracts the four SWOT category lists from the body of the SWOT section.
/// The categories are looked up independently by label, so their order in
/// the source text does not matter; a missing label yields an empty list.
pub fn extract_swot(swot_body: &str) -> Swot {
    let index = DocumentIndex::parse(swot_body);
    Swot {
        strengths: category(&index, &STRENGTHS_RE),
        weaknesses: category(&index, &WEAKNESSES_RE),
        opportunities: category(&index, &OPPORTUNITIES_RE),
        threats: category(&index, &THREATS_RE),
    }
}

fn category(index: &DocumentIndex, label: &Regex) -> Vec<String> {
    index
        .section(label)
        .map(|body| extract_list_items(body, SWOT_MAX_ITEMS, DEFAULT_MIN_CHARS))
        .unwrap_or_default()
}
