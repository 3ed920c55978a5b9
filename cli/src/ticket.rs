//! Finds the ticket reference in a commit message.
use jira::models::core::IssueKey;
use lazy_static::lazy_static;
use regex::Regex;

/// The project prefix tickets are expected to carry.
pub const PROJECT_CODE: &str = "JNYY";

lazy_static! {
    static ref TICKET: Regex = Regex::new(&format!(r"(?i)\b{PROJECT_CODE}-\d+\b")).unwrap();
}

/// Returns the first ticket reference in the message, uppercased.
/// A message without one is a normal outcome, not an error.
pub fn extract(message: &str) -> Option<IssueKey> {
    TICKET.find(message).map(|m| IssueKey::from(m.as_str()))
}
