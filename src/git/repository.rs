use crate::error::{PseudoVersionError, Result};
use crate::git::CommitInfo;
use chrono::{TimeZone, Utc};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            PseudoVersionError::revision(format!(
                "Not in a git repository: {}: {}",
                path.display(),
                e.message()
            ))
        })?;
        debug!(path = %repo.path().display(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn head_commit(&self) -> Result<CommitInfo> {
        let head = self
            .repo
            .head()
            .map_err(|e| PseudoVersionError::revision(format!("Cannot resolve HEAD: {}", e)))?;
        let commit = head.peel_to_commit().map_err(|e| {
            PseudoVersionError::revision(format!("HEAD does not point to a commit: {}", e))
        })?;

        // Committer time, not author time
        let seconds = commit.time().seconds();
        let time = Utc.timestamp_opt(seconds, 0).single().ok_or_else(|| {
            PseudoVersionError::timestamp(format!("{} seconds since epoch", seconds))
        })?;

        Ok(CommitInfo {
            hash: commit.id().to_string(),
            time,
        })
    }

    fn ancestry(&self, hash: &str) -> Result<Vec<String>> {
        let oid = Oid::from_str(hash)
            .map_err(|e| PseudoVersionError::revision(format!("Invalid commit '{}': {}", hash, e)))?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(oid)?;

        let mut hashes = Vec::new();
        for oid_result in revwalk {
            hashes.push(oid_result?.to_string());
        }
        Ok(hashes)
    }

    fn tags_by_commit(&self) -> Result<HashMap<String, Vec<String>>> {
        let tags = self.repo.tag_names(None)?;
        let mut by_commit: HashMap<String, Vec<String>> = HashMap::new();

        for tag_name in tags.iter().flatten() {
            let reference = match self.repo.find_reference(&format!("refs/tags/{}", tag_name)) {
                Ok(reference) => reference,
                Err(e) => {
                    debug!(tag = tag_name, error = %e, "skipping unreadable tag");
                    continue;
                }
            };
            // Peels through annotated tags; tags on trees or blobs are skipped
            match reference.peel_to_commit() {
                Ok(commit) => by_commit
                    .entry(commit.id().to_string())
                    .or_default()
                    .push(tag_name.to_string()),
                Err(e) => debug!(tag = tag_name, error = %e, "tag does not point to a commit"),
            }
        }

        Ok(by_commit)
    }
}

// SAFETY: Git2Repository is only used for reads from a single thread at a time;
// libgit2 is built thread-safe and git2::Repository is already Send.
unsafe impl Sync for Git2Repository {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;

    #[test]
    fn test_git2_repository_open_missing_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = Git2Repository::open(temp_dir.path().join("does-not-exist"));
        assert!(result.is_err());
    }

    #[test]
    fn test_git2_repository_unborn_head() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let repo = Git2Repository::from_git2(Git2Repo::init(temp_dir.path()).unwrap());

        let err = repo.head_commit().unwrap_err();
        assert!(err.to_string().contains("Revision error"));
        assert!(repo.tags_by_commit().unwrap().is_empty());
    }
}
