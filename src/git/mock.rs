use crate::error::{PseudoVersionError, Result};
use crate::git::{CommitInfo, Repository};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// History is linear: commits are pushed newest first and the first one is HEAD.
pub struct MockRepository {
    commits: Vec<CommitInfo>,
    tags: HashMap<String, Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: HashMap::new(),
        }
    }

    /// Append a commit older than every commit pushed so far
    pub fn push_commit(&mut self, hash: impl Into<String>, time: DateTime<Utc>) {
        self.commits.push(CommitInfo {
            hash: hash.into(),
            time,
        });
    }

    /// Add a tag pointing to a commit
    pub fn add_tag(&mut self, name: impl Into<String>, hash: impl Into<String>) {
        self.tags.entry(hash.into()).or_default().push(name.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_commit(&self) -> Result<CommitInfo> {
        self.commits
            .first()
            .cloned()
            .ok_or_else(|| PseudoVersionError::revision("HEAD does not point to a commit"))
    }

    fn ancestry(&self, hash: &str) -> Result<Vec<String>> {
        let start = self
            .commits
            .iter()
            .position(|c| c.hash == hash)
            .ok_or_else(|| PseudoVersionError::revision(format!("Unknown commit: {}", hash)))?;

        Ok(self.commits[start..].iter().map(|c| c.hash.clone()).collect())
    }

    fn tags_by_commit(&self) -> Result<HashMap<String, Vec<String>>> {
        Ok(self.tags.clone())
    }
}
