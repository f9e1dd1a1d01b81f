//! URL reachability check

use crate::scrape::send_get;
use reqwest::{Client, StatusCode};

/// Returns true only when `url` answers `200 OK`
///
/// Transport errors, malformed URLs and every other status are reported the
/// same way: `false`. The reason is logged at debug level.
///
/// # Example
///
/// ```no_run
/// use glean::is_url_reachable;
///
/// # async fn example() {
/// let client = reqwest::Client::new();
/// if is_url_reachable(&client, "https://example.com").await {
///     println!("up");
/// }
/// # }
/// ```
pub async fn is_url_reachable(client: &Client, url: &str) -> bool {
    match send_get(client, url).await {
        Ok(response) if response.status() == StatusCode::OK => true,
        Ok(response) => {
            tracing::debug!("{} answered {}", url, response.status());
            false
        }
        Err(e) => {
            tracing::debug!("{} unreachable: {}", url, e);
            false
        }
    }
}
