use std::sync::LazyLock;

use regex::Regex;

static SCORE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SCORE:\s*(\d+)").expect("score pattern must compile"));

/// Returns the integer after the first `SCORE:` token in `text`, or 0.
///
/// Values are not range-checked; a number too large for `u32` counts as no match.
pub fn extract_score(text: &str) -> u32 {
    SCORE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
