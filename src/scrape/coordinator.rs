//! Scrape coordinator - single-page and batch orchestration
//!
//! [`Scraper`] owns the shared HTTP client and configuration. Batch scraping
//! spawns one task per URL; every task reports its outcome over a bounded
//! channel and a single collecting loop builds the result map, so worker tasks
//! never share mutable state.

use crate::config::ScraperConfig;
use crate::scrape::fetcher::{build_http_client, fetch_html};
use crate::scrape::headlines::parse_headlines;
use crate::scrape::parser::{parse_html, ScrapedData};
use crate::utils::is_url_reachable;
use crate::GleanError;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Outcome reported by one batch task
type TaskReport = (String, Result<ScrapedData, GleanError>);

/// Page scraper sharing one client and configuration across tasks
///
/// Cloning is cheap: the configuration sits behind an `Arc` and the
/// client is reference counted internally.
#[derive(Debug, Clone)]
pub struct Scraper {
    config: Arc<ScraperConfig>,
    client: Client,
}

impl Scraper {
    /// Creates a new scraper
    ///
    /// # Arguments
    ///
    /// * `config` - User agent, delay and timeout applied to every request
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Ready to use
    /// * `Err(GleanError::HttpClient)` - The HTTP client could not be built
    pub fn new(config: ScraperConfig) -> Result<Self, GleanError> {
        let client = build_http_client(&config)?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// The configuration this scraper was built with
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// The shared HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Sleeps for the configured pre-request delay
    async fn pause(&self) {
        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }
    }

    /// Fetches a page body after the configured delay
    ///
    /// # Errors
    ///
    /// Request, transport, status and body errors from the fetcher.
    pub async fn fetch_body(&self, url: &str) -> Result<String, GleanError> {
        self.pause().await;
        tracing::debug!("Fetching {}", url);
        fetch_html(&self.client, url).await
    }

    /// Scrapes a single page
    ///
    /// Waits for the configured delay, fetches the page and extracts its
    /// title, description, links and headings. The first error encountered
    /// is returned and nothing partial is kept.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use glean::{Scraper, ScraperConfig};
    ///
    /// # async fn example() -> Result<(), glean::GleanError> {
    /// let scraper = Scraper::new(ScraperConfig::default())?;
    /// let data = scraper.scrape_url("https://example.com").await?;
    /// println!("{}", data.title);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn scrape_url(&self, url: &str) -> Result<ScrapedData, GleanError> {
        let body = self.fetch_body(url).await?;
        let data = parse_html(&body);

        tracing::debug!(
            "Scraped {}: {} links, {} headings",
            url,
            data.links.len(),
            data.headings.len()
        );

        Ok(data)
    }

    /// Scrapes a page with the heuristic headline selectors
    ///
    /// Overlapping selectors, text longer than ten characters, duplicates kept.
    pub async fn scrape_headlines(&self, url: &str) -> Result<Vec<String>, GleanError> {
        let body = self.fetch_body(url).await?;
        let headlines = parse_headlines(&body);

        tracing::debug!("Found {} headline candidates on {}", headlines.len(), url);

        Ok(headlines)
    }

    /// Checks whether a URL answers `200 OK`
    ///
    /// No delay is applied. Transport errors and any other status count as
    /// unreachable and are only logged at debug level.
    pub async fn is_reachable(&self, url: &str) -> bool {
        is_url_reachable(&self.client, url).await
    }

    /// Scrapes every URL concurrently and collects the successes
    ///
    /// # Concurrency
    ///
    /// - One spawned task per URL, no cap on parallelism
    /// - Each task sends `(url, outcome)` into a channel sized to the URL count,
    ///   so a send never waits
    /// - This function is the only consumer and the only writer of the map
    ///
    /// Failures are logged and left out of the map. The batch itself never
    /// fails: it returns once every task has reported. If the same URL is
    /// listed twice it is scraped twice and the later report wins.
    ///
    /// # Arguments
    ///
    /// * `urls` - The URLs to scrape
    ///
    /// # Returns
    ///
    /// Scraped data keyed by URL, successes only
    pub async fn scrape_urls(&self, urls: &[String]) -> HashMap<String, ScrapedData> {
        let mut results = HashMap::with_capacity(urls.len());

        if urls.is_empty() {
            return results;
        }

        let start_time = Instant::now();
        let (tx, mut rx) = mpsc::channel::<TaskReport>(urls.len());

        for url in urls {
            let tx = tx.clone();
            let scraper = self.clone();
            let url = url.clone();

            tokio::spawn(async move {
                let outcome = scraper.scrape_url(&url).await;
                if tx.send((url, outcome)).await.is_err() {
                    tracing::debug!("Collector gone before a scrape result was delivered");
                }
            });
        }

        // Only the tasks hold senders now; recv() yields None once all of
        // them are gone
        drop(tx);

        let mut failed = 0usize;
        for _ in 0..urls.len() {
            match rx.recv().await {
                Some((url, Ok(data))) => {
                    results.insert(url, data);
                }
                Some((url, Err(e))) => {
                    failed += 1;
                    tracing::warn!("Failed to scrape {}: {}", url, e);
                }
                None => {
                    tracing::error!(
                        "Scrape tasks ended without reporting ({} of {} collected)",
                        results.len() + failed,
                        urls.len()
                    );
                    break;
                }
            }
        }

        tracing::info!(
            "Batch complete: {} succeeded, {} failed in {:?}",
            results.len(),
            failed,
            start_time.elapsed()
        );

        results
    }
}

/// Scrapes a list of URLs with a fresh scraper
///
/// Convenience entry point for callers that only need one batch.
///
/// # Example
///
/// ```no_run
/// use glean::scrape::scrape_all;
/// use glean::ScraperConfig;
///
/// # async fn example() -> Result<(), glean::GleanError> {
/// let urls = vec!["https://example.com".to_string()];
/// let results = scrape_all(ScraperConfig::default(), &urls).await?;
/// for (url, data) in &results {
///     println!("{}: {}", url, data.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn scrape_all(
    config: ScraperConfig,
    urls: &[String],
) -> Result<HashMap<String, ScrapedData>, GleanError> {
    let scraper = Scraper::new(config)?;
    Ok(scraper.scrape_urls(urls).await)
}
