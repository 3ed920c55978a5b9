use super::core::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A work log entry as returned by Jira after creation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Worklog {
    pub id: String,
    pub author: Author,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub started: DateTime<Utc>,
    #[serde(alias = "timeSpent")]
    pub time_spent: String,
    #[serde(alias = "timeSpentSeconds")]
    pub time_spent_seconds: i64,
    /// Numeric FK to issue
    #[serde(alias = "issueId")]
    pub issue_id: String,
}

/// Payload for creating a work log entry.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insert {
    pub time_spent_seconds: i64,
    pub comment: CommentBody,
    pub started: String,
}

/// The v3 API wants comments in Atlassian Document Format: a single
/// paragraph of plain text wrapped in a `doc` envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentBody {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub version: u8,
    pub content: Vec<Paragraph>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(rename = "type")]
    pub node_type: String,
    pub content: Vec<TextNode>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(rename = "type")]
    pub node_type: String,
    pub text: String,
}

impl CommentBody {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        CommentBody {
            doc_type: "doc".to_string(),
            version: 1,
            content: vec![Paragraph {
                node_type: "paragraph".to_string(),
                content: vec![TextNode {
                    node_type: "text".to_string(),
                    text: text.to_string(),
                }],
            }],
        }
    }
}
