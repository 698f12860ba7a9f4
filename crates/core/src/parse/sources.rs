use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Three citation forms: numbered news token, fixed uploaded-file marker,
// bracketed PDF filename.
static CITATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[뉴스\s*\d+\]|\[업로드파일\]|\[[^\[\]]+\.(?i:pdf)\]").expect("citation regex")
});

/// Scans the complete raw text (not any single section) for citation
/// tokens. Duplicates collapse to the first occurrence; order is preserved.
pub fn extract_sources(full_text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();
    for m in CITATION_RE.find_iter(full_text) {
        let token = m.as_str().to_string();
        if seen.insert(token.clone()) {
            sources.push(token);
        }
    }
    sources
}
