use std::path::Path;

use git2::{ErrorCode, Repository};
use log::debug;

use crate::error::WorklogError;

/// Returns the full message (subject and body) of the commit `HEAD`
/// points at.
pub fn latest_commit_message(path: &Path) -> Result<String, WorklogError> {
    let repo = match Repository::open(path) {
        Ok(repo) => repo,
        Err(e) if e.code() == ErrorCode::NotFound => return Err(WorklogError::NotInGitRepo),
        Err(e) => return Err(WorklogError::Git(e)),
    };
    // An unborn branch has a HEAD ref but nothing behind it; any other
    // HEAD-resolution failure is a real git error
    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if e.code() == ErrorCode::UnbornBranch => return Err(WorklogError::NoCommits),
        Err(e) => return Err(WorklogError::Git(e)),
    };
    let commit = head.peel_to_commit()?;

    let message = commit.message().unwrap_or("").trim().to_string();
    debug!("HEAD commit {} message {:?}", commit.id(), message);
    if message.is_empty() {
        return Err(WorklogError::EmptyCommitMessage);
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use tempfile::TempDir;

    fn repo_with_commit(message: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
            .unwrap();
        dir
    }

    #[test]
    fn reads_latest_commit_message() {
        let dir = repo_with_commit("feat: jnyy-42 add login\n\nLonger body text.\n");
        let message = latest_commit_message(dir.path()).unwrap();
        assert_eq!(message, "feat: jnyy-42 add login\n\nLonger body text.");
    }

    #[test]
    fn missing_repository() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            latest_commit_message(dir.path()),
            Err(WorklogError::NotInGitRepo)
        ));
    }

    #[test]
    fn repository_without_commits() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();
        assert!(matches!(
            latest_commit_message(dir.path()),
            Err(WorklogError::NoCommits)
        ));
    }
}
