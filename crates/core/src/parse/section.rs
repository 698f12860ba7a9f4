use once_cell::sync::Lazy;
use regex::Regex;

// Heading shape: marker run, optional ordinal ("1.", "2)"), label. The
// stated ordinal is decorative and dropped; sections are matched by label.
// The ordinal separator is mandatory so a label that merely starts with
// digits ("52주 최고가") keeps them.
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s*(?:\d+\s*[.)]\s*)?(.*?)\s*$").expect("heading regex"));

#[derive(Debug, Clone)]
pub struct HeadingBlock {
    pub depth: usize,
    pub title: String,
    pub body: String,
}

/// One-pass index of every heading in a report, in document order. Each
/// heading's body runs up to the next heading of the same or shallower
/// depth, so deeper sub-headings remain part of the parent's body text.
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    blocks: Vec<HeadingBlock>,
}

impl DocumentIndex {
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();

        let mut headings: Vec<(usize, usize, String)> = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            if !line.starts_with('#') {
                continue;
            }
            if let Some(caps) = HEADING_RE.captures(line) {
                headings.push((idx, caps[1].len(), caps[2].trim().to_string()));
            }
        }

        let mut blocks = Vec::with_capacity(headings.len());
        for (i, (line_idx, depth, title)) in headings.iter().enumerate() {
            let end_line = headings[i + 1..]
                .iter()
                .find(|(_, d, _)| d <= depth)
                .map(|(l, _, _)| *l)
                .unwrap_or(lines.len());
            blocks.push(HeadingBlock {
                depth: *depth,
                title: title.clone(),
                body: lines[line_idx + 1..end_line].join("\n"),
            });
        }

        tracing::trace!(headings = blocks.len(), "indexed report headings");
        Self { blocks }
    }

    /// Body of the first heading (document order) whose label matches the
    /// pattern, regardless of its stated ordinal or position.
    pub fn section(&self, label: &Regex) -> Option<&str> {
        self.blocks
            .iter()
            .find(|block| label.is_match(&block.title))
            .map(|block| block.body.as_str())
    }

    pub fn blocks(&self) -> &[HeadingBlock] {
        &self.blocks
    }
}
