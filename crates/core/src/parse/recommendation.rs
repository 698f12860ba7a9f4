use crate::domain::report::{Opinion, Recommendation};
use once_cell::sync::Lazy;
use regex::Regex;

static OPINION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)투자\s*등급\s*[:：]?\s*(BUY|HOLD|SELL)").expect("opinion regex"));
static TARGET_PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"목표\s*주가\s*[:：]?\s*([0-9][0-9,]*)\s*원").expect("target regex"));
static CURRENT_PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"현재\s*주가\s*[:：]?\s*([0-9][0-9,]*)\s*원").expect("current regex"));
static REASON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"근거\s*[:：]?\s*(.+)").expect("reason regex"));

/// Extracts the investment opinion from the recommendation section body.
/// Every step is independently optional: a missing grade falls back to
/// HOLD, missing prices render as "-", and the upside is computed only
/// when both prices parsed.
pub fn extract_recommendation(body: &str, horizon: &str) -> Recommendation {
    let opinion = OPINION_RE
        .captures(body)
        .map(|caps| match caps[1].to_ascii_uppercase().as_str() {
            "BUY" => Opinion::Buy,
            "SELL" => Opinion::Sell,
            _ => Opinion::Hold,
        })
        .unwrap_or(Opinion::Hold);

    let target = capture_price(body, &TARGET_PRICE_RE);
    let current = capture_price(body, &CURRENT_PRICE_RE);
    let upside = compute_upside(target.as_deref(), current.as_deref());

    let reason = REASON_RE
        .captures(body)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();

    Recommendation {
        opinion,
        target_price: display_price(target.as_deref()),
        current_price: display_price(current.as_deref()),
        upside,
        horizon: horizon.to_string(),
        reason,
    }
}

// Raw digit run with thousand separators, without the currency unit.
fn capture_price(body: &str, re: &Regex) -> Option<String> {
    re.captures(body).map(|caps| caps[1].to_string())
}

fn display_price(raw: Option<&str>) -> String {
    match raw {
        Some(digits) => format!("{digits}원"),
        None => "-".to_string(),
    }
}

/// `(target - current) / current * 100`, one decimal, explicit sign.
/// Absent (never a placeholder zero) unless both prices parse and the
/// current price is positive.
fn compute_upside(target: Option<&str>, current: Option<&str>) -> Option<String> {
    let target: i64 = target?.replace(',', "").parse().ok()?;
    let current: i64 = current?.replace(',', "").parse().ok()?;
    if current <= 0 {
        return None;
    }
    let pct = (target - current) as f64 / current as f64 * 100.0;
    Some(format!("{pct:+.1}%"))
}
