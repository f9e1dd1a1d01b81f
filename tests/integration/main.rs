//! Integration tests for the scraper
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! fetch, extract and batch paths end-to-end.

mod scrape_tests;

use glean::{Scraper, ScraperConfig};
use std::time::Duration;
use wiremock::ResponseTemplate;

/// User agent every test scraper sends
pub const TEST_USER_AGENT: &str = "GleanTestBot/1.0";

/// Scraper with no delay and a short timeout
pub fn create_test_scraper() -> Scraper {
    create_scraper_with(Duration::ZERO, Duration::from_secs(5))
}

pub fn create_scraper_with(delay: Duration, timeout: Duration) -> Scraper {
    Scraper::new(ScraperConfig::new(TEST_USER_AGENT, delay, timeout))
        .expect("Failed to build scraper")
}

/// A 200 response carrying the given HTML
pub fn html_response(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.into())
        .insert_header("content-type", "text/html; charset=utf-8")
}
