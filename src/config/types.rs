use serde::Deserialize;
use std::time::Duration;

/// Browser-like user agent sent when nothing else is configured
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Pause before every request
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared read-only by every scrape operation
///
/// Built once and handed to [`crate::Scraper`], which keeps it behind an `Arc`
/// so concurrent tasks can read it without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Value of the `User-Agent` header on every request
    pub user_agent: String,

    /// Sleep applied before each request, not coordinated between tasks
    pub delay: Duration,

    /// Upper bound for a single request, connect through body
    pub timeout: Duration,
}

impl ScraperConfig {
    pub fn new(user_agent: impl Into<String>, delay: Duration, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            delay,
            timeout,
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT, DEFAULT_DELAY, DEFAULT_TIMEOUT)
    }
}

/// Top-level configuration file for the command-line driver
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// URLs scraped when none are given on the command line
    #[serde(default)]
    pub urls: Vec<String>,

    #[serde(default)]
    pub scraper: ScraperSection,

    #[serde(default)]
    pub output: OutputConfig,
}

/// `[scraper]` table as written in the file
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSection {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Pre-request delay (milliseconds)
    #[serde(rename = "delay-ms", default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ScraperSection {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            delay_ms: default_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl From<ScraperSection> for ScraperConfig {
    fn from(section: ScraperSection) -> Self {
        ScraperConfig::new(
            section.user_agent,
            Duration::from_millis(section.delay_ms),
            Duration::from_secs(section.timeout_secs),
        )
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Where results are written as JSON, if anywhere
    #[serde(rename = "json-path")]
    pub json_path: Option<String>,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}
