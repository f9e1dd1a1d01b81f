//! Scrape module for page fetching and field extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with error classification
//! - HTML parsing and field extraction
//! - Heuristic headline extraction
//! - Concurrent batch coordination

mod coordinator;
mod fetcher;
mod headlines;
mod parser;

pub use coordinator::{scrape_all, Scraper};
pub use fetcher::{build_http_client, fetch_html, send_get};
pub use headlines::{extract_headlines, parse_headlines};
pub use parser::{extract_page_data, parse_html, ScrapedData};
