use std::sync::LazyLock;

use regex::Regex;

static NON_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());
// a '+' somewhere before the first digit
static LEADING_PLUS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^0-9]*\+").unwrap());

const MISSING: &[&str] = &["n/a", "na", "none"];

/// Canonicalize a phone number.
///
/// Keeps only digits plus a leading `+`. Without a `+`, 11 digits starting
/// with `1` get a `+` and 10 digits get `+1`; anything else stays as bare
/// digits with no assumed country code. Empty or "missing" values are `None`.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || MISSING.contains(&trimmed.to_lowercase().as_str()) {
        return None;
    }

    let digits = NON_DIGIT_RE.replace_all(trimmed, "");
    if digits.is_empty() {
        return None;
    }
    if LEADING_PLUS_RE.is_match(trimmed) {
        return Some(format!("+{}", digits));
    }

    let canonical = match digits.len() {
        11 if digits.starts_with('1') => format!("+{}", digits),
        10 => format!("+1{}", digits),
        _ => digits.into_owned(),
    };
    Some(canonical)
}
