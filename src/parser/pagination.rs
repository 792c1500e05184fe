use std::sync::LazyLock;

use scraper::{Html, Selector};

static NEXT_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a#next").unwrap());

/// `href` of the `<a id="next">` link, verbatim. A link without `href` counts as absent.
pub fn next_href(doc: &Html) -> Option<String> {
    doc.select(&NEXT_SEL)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}
