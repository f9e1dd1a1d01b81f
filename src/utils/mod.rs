//! Standalone helpers that sit beside the scraper
//!
//! - Reachability checks for a single URL
//! - Email address extraction from arbitrary text

mod email;
mod reachability;

pub use email::extract_emails;
pub use reachability::is_url_reachable;
