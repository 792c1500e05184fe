use std::collections::HashMap;
use std::sync::LazyLock;

use super::text::title_case;

static CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("usa", "United States"),
        ("united states", "United States"),
        ("canada", "Canada"),
        ("uk", "United Kingdom"),
        ("united kingdom", "United Kingdom"),
        ("mexico", "Mexico"),
    ])
});

/// Map known spellings to one label per country; title-case anything else.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    match CANONICAL.get(trimmed.to_lowercase().as_str()) {
        Some(label) => label.to_string(),
        None => title_case(trimmed),
    }
}
