use inquire::InquireError;
use jira::models::core::IssueKey;
use jira::JiraError;
use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug)]
pub enum WorklogError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<String>),
    #[error("not inside a git repository")]
    NotInGitRepo,
    #[error("no commits found in this repository")]
    NoCommits,
    #[error("the latest commit has an empty message")]
    EmptyCommitMessage,
    #[error("git error: {0}")]
    Git(#[from] git2::Error),
    #[error("ticket {0} not found in Jira")]
    TicketNotFound(IssueKey),
    #[error("{0}")]
    Jira(#[from] JiraError),
    #[error("operation cancelled")]
    Cancelled,
    #[error("prompt failed: {0}")]
    Prompt(String),
}

impl From<InquireError> for WorklogError {
    fn from(err: InquireError) -> Self {
        match err {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                WorklogError::Cancelled
            }
            other => WorklogError::Prompt(other.to_string()),
        }
    }
}
