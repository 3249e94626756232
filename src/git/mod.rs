//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the few Git reads
//! needed to build a pseudo-version: the HEAD commit, its ancestry, and the
//! tags in the repository.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! [latest_semver_tag] walks the ancestry and picks the nearest tag that is a
//! semantic version.
//!
//! ```rust
//! # use git_pseudoversion::git::{latest_semver_tag, Repository};
//! # use git_pseudoversion::domain::TagPattern;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let head = repo.head_commit()?;
//! let pattern = TagPattern::new("v{version}")?;
//! let search = latest_semver_tag(repo, &pattern, &head.hash)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::boundary::BoundaryWarning;
use crate::domain::{classify, Classification, TagPattern};
use crate::error::Result;

/// Commit information needed for a pseudo-version
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The full commit hash
    pub hash: String,
    /// The committer time
    pub time: DateTime<Utc>,
}

/// Common git operation trait for abstraction
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::PseudoVersionError] variants.
pub trait Repository: Send + Sync {
    /// Get the commit HEAD points to
    ///
    /// # Returns
    /// * `Ok(CommitInfo)` - Full hash and committer time of HEAD
    /// * `Err` - If HEAD is unborn or the commit time is out of range
    fn head_commit(&self) -> Result<CommitInfo>;

    /// Get the hashes of all commits reachable from `hash`
    ///
    /// The commit itself comes first, followed by its ancestors, newest first.
    fn ancestry(&self, hash: &str) -> Result<Vec<String>>;

    /// Get all tag names keyed by the hash of the commit they point to
    ///
    /// Handles both lightweight and annotated tags. Tags that do not
    /// resolve to a commit are left out.
    fn tags_by_commit(&self) -> Result<HashMap<String, Vec<String>>>;
}

/// A semver tag found in the ancestry of a revision
#[derive(Debug, Clone, PartialEq)]
pub struct FoundTag {
    /// Tag name as stored in the repository (e.g., "release-1.2.3")
    pub name: String,
    /// Version candidate extracted through the tag pattern (e.g., "v1.2.3")
    pub version: String,
    /// Hash of the tagged commit
    pub commit: String,
}

/// Outcome of [latest_semver_tag]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagSearch {
    pub found: Option<FoundTag>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Finds the nearest semver tag reachable from `head`.
///
/// Commits are visited newest first. On the first commit that carries at
/// least one tag matching `pattern` and parsing as a semantic version, the
/// tag with the highest precedence wins. Tags that match the pattern but are
/// not semantic versions are skipped and reported as warnings.
pub fn latest_semver_tag<R: Repository + ?Sized>(
    repo: &R,
    pattern: &TagPattern,
    head: &str,
) -> Result<TagSearch> {
    let tags = repo.tags_by_commit()?;
    let mut search = TagSearch::default();

    for hash in repo.ancestry(head)? {
        let Some(names) = tags.get(&hash) else {
            continue;
        };

        let mut best: Option<(Classification, FoundTag)> = None;
        for name in names {
            if !pattern.matches(name) {
                trace!(tag = %name, pattern = %pattern.pattern, "tag does not match pattern");
                continue;
            }
            let Some(version) = pattern.version_of(name) else {
                continue;
            };
            let classification = classify(&version);
            if !classification.is_valid() {
                search.warnings.push(BoundaryWarning::UnparsableTag {
                    tag: name.clone(),
                    reason: format!("'{}' is not a semantic version", version),
                });
                continue;
            }

            let higher = best
                .as_ref()
                .map_or(true, |(b, _)| classification.cmp_precedence(b) == Ordering::Greater);
            if higher {
                best = Some((
                    classification,
                    FoundTag {
                        name: name.clone(),
                        version,
                        commit: hash.clone(),
                    },
                ));
            }
        }

        if let Some((_, found)) = best {
            debug!(tag = %found.name, commit = %found.commit, "found base tag");
            if found.commit == head {
                search.warnings.push(BoundaryWarning::RevisionIsTagged {
                    tag: found.name.clone(),
                    revision: head.to_string(),
                });
            }
            search.found = Some(found);
            return Ok(search);
        }
    }

    debug!(head, "no semver tag reachable");
    search.warnings.push(BoundaryWarning::NoReachableTag {
        revision: head.to_string(),
        pattern: pattern.pattern.clone(),
    });
    Ok(search)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const C1: &str = "1111111111111111111111111111111111111111";
    const C2: &str = "2222222222222222222222222222222222222222";
    const C3: &str = "3333333333333333333333333333333333333333";

    fn repo() -> MockRepository {
        let t = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        let mut repo = MockRepository::new();
        // newest first
        repo.push_commit(C3, t);
        repo.push_commit(C2, t);
        repo.push_commit(C1, t);
        repo
    }

    fn default_pattern() -> TagPattern {
        TagPattern::new("v{version}").unwrap()
    }

    #[test]
    fn test_latest_tag_nearest_wins() {
        let mut repo = repo();
        repo.add_tag("v1.0.0", C1);
        repo.add_tag("v1.1.0", C2);

        let search = latest_semver_tag(&repo, &default_pattern(), C3).unwrap();
        let found = search.found.unwrap();
        assert_eq!(found.name, "v1.1.0");
        assert_eq!(found.commit, C2);
        assert!(search.warnings.is_empty());
    }

    #[test]
    fn test_latest_tag_highest_on_same_commit() {
        let mut repo = repo();
        repo.add_tag("v1.2.0-rc.1", C2);
        repo.add_tag("v1.2.0", C2);
        repo.add_tag("v1.10.0", C1);

        let search = latest_semver_tag(&repo, &default_pattern(), C3).unwrap();
        assert_eq!(search.found.unwrap().version, "v1.2.0");
    }

    #[test]
    fn test_latest_tag_skips_unparsable() {
        let mut repo = repo();
        repo.add_tag("v1.x", C2);
        repo.add_tag("v0.9.0", C1);

        let search = latest_semver_tag(&repo, &default_pattern(), C3).unwrap();
        assert_eq!(search.found.unwrap().name, "v0.9.0");
        assert_eq!(search.warnings.len(), 1);
        assert!(matches!(
            &search.warnings[0],
            BoundaryWarning::UnparsableTag { tag, .. } if tag == "v1.x"
        ));
    }

    #[test]
    fn test_latest_tag_ignores_non_matching() {
        let mut repo = repo();
        repo.add_tag("latest", C3);
        repo.add_tag("release-2.0.0", C2);

        let search = latest_semver_tag(&repo, &default_pattern(), C3).unwrap();
        assert_eq!(search.found, None);
        assert_eq!(
            search.warnings,
            vec![BoundaryWarning::NoReachableTag {
                revision: C3.to_string(),
                pattern: "v{version}".to_string(),
            }]
        );
    }

    #[test]
    fn test_latest_tag_beyond_u64() {
        let mut repo = repo();
        repo.add_tag("v1.2.3", C2);
        repo.add_tag("v1.2.18446744073709551616", C2);

        let search = latest_semver_tag(&repo, &default_pattern(), C3).unwrap();
        assert_eq!(search.found.unwrap().name, "v1.2.18446744073709551616");
        assert!(search.warnings.is_empty());
    }

    #[test]
    fn test_latest_tag_custom_pattern() {
        let mut repo = repo();
        repo.add_tag("release-2.0.0", C2);

        let pattern = TagPattern::new("release-{version}").unwrap();
        let found = latest_semver_tag(&repo, &pattern, C3).unwrap().found.unwrap();
        assert_eq!(found.name, "release-2.0.0");
        assert_eq!(found.version, "v2.0.0");
    }

    #[test]
    fn test_latest_tag_on_head_warns() {
        let mut repo = repo();
        repo.add_tag("v3.0.0", C3);

        let search = latest_semver_tag(&repo, &default_pattern(), C3).unwrap();
        assert_eq!(search.found.unwrap().name, "v3.0.0");
        assert!(matches!(
            search.warnings.as_slice(),
            [BoundaryWarning::RevisionIsTagged { .. }]
        ));
    }

    #[test]
    fn test_latest_tag_not_reachable_from_older_commit() {
        let mut repo = repo();
        repo.add_tag("v1.0.0", C3);

        let search = latest_semver_tag(&repo, &default_pattern(), C2).unwrap();
        assert_eq!(search.found, None);
    }
}
