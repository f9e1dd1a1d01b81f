use crate::config::types::{Config, OutputConfig, ScraperSection};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_section(&config.scraper)?;
    validate_urls(&config.urls)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the `[scraper]` table
fn validate_scraper_section(section: &ScraperSection) -> Result<(), ConfigError> {
    if section.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if section.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            section.timeout_secs
        )));
    }

    Ok(())
}

/// Validates the URL list: every entry must be an absolute http(s) URL
pub fn validate_urls(urls: &[String]) -> Result<(), ConfigError> {
    for raw in urls {
        let url = Url::parse(raw)
            .map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", raw, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!(
                "'{}' must use http or https",
                raw
            )));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.json_path {
        if path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "json-path cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}
