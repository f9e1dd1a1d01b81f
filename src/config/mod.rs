//! Configuration module for Glean
//!
//! [`ScraperConfig`] is what the library consumes. The remaining types describe
//! the optional TOML file read by the command-line driver.
//!
//! # Example
//!
//! ```no_run
//! use glean::config::load_config;
//! use glean::ScraperConfig;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("glean.toml")).unwrap();
//! let scraper_config = ScraperConfig::from(config.scraper);
//! println!("Request timeout: {:?}", scraper_config.timeout);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{
    Config, OutputConfig, ScraperConfig, ScraperSection, DEFAULT_DELAY, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT,
};

pub use parser::{load_config, parse_config};
pub use validation::validate_urls;
