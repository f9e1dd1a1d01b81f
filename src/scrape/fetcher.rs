//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made by the scraper:
//! - Building the shared HTTP client with the configured user agent and timeout
//! - Validating the target URL before anything goes on the wire
//! - GET requests with error classification (request, transport, status, body)

use crate::config::ScraperConfig;
use crate::GleanError;
use reqwest::{Client, Response, StatusCode};
use url::Url;

/// Builds an HTTP client from the scraper configuration
///
/// The client is cheap to clone and shares its connection pool between
/// clones, so one instance serves every concurrent task.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use glean::ScraperConfig;
/// use glean::scrape::build_http_client;
///
/// let client = build_http_client(&ScraperConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ScraperConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Sends a GET request and returns the raw response, whatever its status
///
/// # Errors
///
/// * `GleanError::Request` - the URL does not parse or the request cannot be built
/// * `GleanError::Transport` - connecting, TLS, redirects or the timeout failed
pub async fn send_get(client: &Client, url: &str) -> Result<Response, GleanError> {
    let target = Url::parse(url).map_err(|e| GleanError::Request {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let request = client.get(target).build().map_err(|e| GleanError::Request {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    client
        .execute(request)
        .await
        .map_err(|e| classify_send_error(url, e))
}

/// Fetches a page and returns its body as text
///
/// Anything other than `200 OK` is a failure, redirects are followed by the
/// client before the status is inspected.
///
/// # Errors
///
/// * `GleanError::Request` / `GleanError::Transport` - see [`send_get`]
/// * `GleanError::HttpStatus` - the final response was not `200 OK`
/// * `GleanError::HtmlParse` - the body could not be read or decoded
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, GleanError> {
    let response = send_get(client, url).await?;
    let status = response.status();

    if status != StatusCode::OK {
        return Err(GleanError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| GleanError::HtmlParse {
        url: url.to_string(),
        message: format!("failed to read body: {}", e),
    })
}

/// Maps a reqwest send failure onto the error kinds callers care about
fn classify_send_error(url: &str, error: reqwest::Error) -> GleanError {
    if error.is_builder() {
        GleanError::Request {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        GleanError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}
