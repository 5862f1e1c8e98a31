//! Email extraction from raw page text.
//!
//! One fixed RFC-5322-lite pattern: alphanumeric local part with `._%+-`,
//! alphanumeric domain with `.-`, TLD of two or more letters. Matches are
//! returned in document order with duplicates kept; deduplication is the
//! consumer's call, not ours.

use regex::Regex;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Collect every email-shaped token in `text`, document order, duplicates
/// included.
pub fn extract_emails(text: &str) -> Vec<String> {
    let re = Regex::new(EMAIL_PATTERN).expect("email pattern is valid");
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
