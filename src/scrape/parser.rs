//! HTML field extraction
//!
//! Pulls the fields Glean reports out of a parsed document:
//! - Title (first `<title>`, trimmed)
//! - Meta description (`<meta name="description" content="...">`)
//! - Every anchor `href`, as written in the document
//! - `h1`/`h2`/`h3` text, trimmed, blank entries dropped

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("hardcoded selector is valid"));

static DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("hardcoded selector is valid")
});

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("hardcoded selector is valid"));

static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3").expect("hardcoded selector is valid"));

/// Fields extracted from one successfully scraped page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedData {
    /// Text of the first `<title>`, empty when the page has none
    pub title: String,

    /// `content` of `<meta name="description">`, empty when absent
    pub description: String,

    /// Anchor `href` values in document order, unresolved
    pub links: Vec<String>,

    /// Non-blank `h1`/`h2`/`h3` text in document order
    pub headings: Vec<String>,
}

/// Parses HTML content and extracts the page fields
///
/// html5ever recovers from malformed markup the way browsers do, so this
/// never fails; a body that could not be read at all is reported by the
/// fetcher instead.
///
/// # Example
///
/// ```
/// use glean::scrape::parse_html;
///
/// let html = r#"<html><head><title> Test </title></head><body><a href="/page">Link</a></body></html>"#;
/// let data = parse_html(html);
/// assert_eq!(data.title, "Test");
/// assert_eq!(data.links, vec!["/page".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ScrapedData {
    let document = Html::parse_document(html);
    extract_page_data(&document)
}

/// Extracts the page fields from an already parsed document
pub fn extract_page_data(document: &Html) -> ScrapedData {
    ScrapedData {
        title: extract_title(document),
        description: extract_description(document),
        links: extract_links(document),
        headings: extract_headings(document),
    }
}

fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn extract_description(document: &Html) -> String {
    document
        .select(&DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

fn extract_links(document: &Html) -> Vec<String> {
    document
        .select(&LINK_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

fn extract_headings(document: &Html) -> Vec<String> {
    document
        .select(&HEADING_SELECTOR)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}
