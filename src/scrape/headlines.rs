//! Heuristic headline extraction
//!
//! News and blog pages rarely agree on markup, so this casts a wide net:
//! plain headings plus anything whose class mentions "headline" or "title".
//! The selectors overlap on purpose and the same text can be reported more
//! than once.

use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Selectors tried in order; each one is evaluated on its own
const HEADLINE_SELECTORS: &[&str] = &[
    "h1",
    "h2",
    "h3",
    r#"[class*="headline"]"#,
    r#"[class*="title"]"#,
    "article h2",
];

/// Text must be longer than this many characters to count as a headline
const MIN_HEADLINE_CHARS: usize = 10;

static COMPILED_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    HEADLINE_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("hardcoded selector is valid"))
        .collect()
});

/// Extracts candidate headlines from a raw HTML string
pub fn parse_headlines(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    extract_headlines(&document)
}

/// Extracts candidate headlines from a parsed document
///
/// Results follow selector order first, then document order within a
/// selector. Nothing is deduplicated.
pub fn extract_headlines(document: &Html) -> Vec<String> {
    let mut headlines = Vec::new();

    for selector in COMPILED_SELECTORS.iter() {
        for element in document.select(selector) {
            let text = element.text().collect::<String>();
            let text = text.trim();

            if text.chars().count() > MIN_HEADLINE_CHARS {
                headlines.push(text.to_string());
            }
        }
    }

    headlines
}
