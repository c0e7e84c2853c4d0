//! Git repository access.

use std::path::Path;

use anyhow::{Context, Result};
use git2::Repository;

/// Git repository wrapper.
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Opens the repository containing the current directory.
    pub fn open() -> Result<Self> {
        let repo = Repository::discover(".").context("Not in a git repository")?;

        Ok(Self { repo })
    }

    /// Opens the repository at the specified path.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Failed to open git repository")?;

        Ok(Self { repo })
    }

    /// Returns the full message of the commit `rev` resolves to.
    ///
    /// `rev` accepts anything `git rev-parse` does, such as `HEAD`, `HEAD~2`,
    /// a branch name or a (short) hash.
    pub fn commit_message(&self, rev: &str) -> Result<String> {
        let object = self
            .repo
            .revparse_single(rev)
            .with_context(|| format!("Failed to resolve revision: {rev}"))?;
        let commit = object
            .peel_to_commit()
            .with_context(|| format!("Revision does not point to a commit: {rev}"))?;

        let message = commit
            .message()
            .with_context(|| format!("Commit message of {rev} is not valid UTF-8"))?;

        Ok(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use tempfile::TempDir;

    fn repo_with_commits(messages: &[&str]) -> TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap();
        let signature = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let mut parent: Option<git2::Oid> = None;
        for message in messages {
            let parent_commit = parent.map(|oid| repo.find_commit(oid).unwrap());
            let parents: Vec<&git2::Commit> = parent_commit.iter().collect();
            let oid = repo
                .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
                .unwrap();
            parent = Some(oid);
        }

        temp_dir
    }

    #[test]
    fn reads_head_and_ancestors() {
        let temp_dir = repo_with_commits(&["Initial commit", "Add feature\n\nWhy it matters.\n"]);
        let repo = GitRepository::open_at(temp_dir.path()).unwrap();

        assert_eq!(
            repo.commit_message("HEAD").unwrap(),
            "Add feature\n\nWhy it matters.\n"
        );
        assert_eq!(repo.commit_message("HEAD~1").unwrap(), "Initial commit");
    }

    #[test]
    fn unknown_revision_is_an_error() {
        let temp_dir = repo_with_commits(&["Initial commit"]);
        let repo = GitRepository::open_at(temp_dir.path()).unwrap();

        let err = repo.commit_message("no-such-branch").unwrap_err();
        assert!(err.to_string().contains("no-such-branch"));
    }

    #[test]
    fn open_outside_repository_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(GitRepository::open_at(temp_dir.path()).is_err());
    }
}
