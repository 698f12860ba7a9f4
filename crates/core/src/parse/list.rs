pub const DEFAULT_MAX_ITEMS: usize = 5;
pub const DEFAULT_MIN_CHARS: usize = 10;

/// Collects bullet lines (`-` or `*`) from a section body. Items at or
/// below `min_chars` characters are noise (stray punctuation, mid-sentence
/// line breaks) and are dropped; non-bulleted lines are ignored, never
/// merged into a neighboring item.
pub fn extract_list_items(body: &str, max_items: usize, min_chars: usize) -> Vec<String> {
    let mut items = Vec::new();
    for line in body.lines() {
        if items.len() == max_items {
            break;
        }
        let trimmed = line.trim();
        let rest = match trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('*'))
        {
            Some(rest) => rest.trim(),
            None => continue,
        };
        if rest.chars().count() <= min_chars {
            continue;
        }
        items.push(rest.to_string());
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markers_and_keeps_document_order() {
        let body = "- 반도체 업황 회복으로 실적 개선 기대\n* HBM 수요 증가에 따른 수혜 전망\n설명 문단은 무시된다.\n- 주주환원 정책 강화 발표 예정";
        let items = extract_list_items(body, DEFAULT_MAX_ITEMS, DEFAULT_MIN_CHARS);
        assert_eq!(
            items,
            vec![
                "반도체 업황 회복으로 실적 개선 기대",
                "HBM 수요 증가에 따른 수혜 전망",
                "주주환원 정책 강화 발표 예정",
            ]
        );
    }

    #[test]
    fn drops_short_noise_items() {
        let body = "- 짧음\n- .\n- 충분히 길게 작성된 실제 포인트 항목";
        let items = extract_list_items(body, DEFAULT_MAX_ITEMS, DEFAULT_MIN_CHARS);
        assert_eq!(items, vec!["충분히 길게 작성된 실제 포인트 항목"]);
    }

    #[test]
    fn truncates_to_max_items() {
        let body = (1..=8)
            .map(|i| format!("- 여덟 개 중에서 살아남을 항목 번호 {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let items = extract_list_items(&body, 5, DEFAULT_MIN_CHARS);
        assert_eq!(items.len(), 5);
        assert!(items[4].ends_with("번호 5"));
    }

    #[test]
    fn ignores_indented_and_empty_bodies() {
        let items = extract_list_items(
            "  - 들여쓰기된 불릿도 항목으로 인정된다",
            DEFAULT_MAX_ITEMS,
            DEFAULT_MIN_CHARS,
        );
        assert_eq!(items.len(), 1);
        assert!(extract_list_items("", DEFAULT_MAX_ITEMS, DEFAULT_MIN_CHARS).is_empty());
    }
}
