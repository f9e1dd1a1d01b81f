//! Email address extraction

use regex::Regex;
use std::sync::LazyLock;

/// Pattern used to recognise email addresses
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("hardcoded regex pattern is valid"));

/// Returns every email address found in `text`
///
/// Matches are non-overlapping, leftmost-first, in the order they appear.
/// Duplicates are kept.
///
/// # Example
///
/// ```
/// use glean::extract_emails;
///
/// let emails = extract_emails("contact a@b.com or c@d.org");
/// assert_eq!(emails, vec!["a@b.com", "c@d.org"]);
/// ```
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
