use std::fmt;

use crate::domain::revision::shorten_sha1;

/// Warnings that occur when looking for the base tag of a revision.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No semver tag matching the pattern is reachable from the revision
    NoReachableTag { revision: String, pattern: String },
    /// Tag matches the pattern but cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// The revision itself carries the base tag
    RevisionIsTagged { tag: String, revision: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoReachableTag { revision, pattern } => {
                write!(
                    f,
                    "No tag matching '{}' is reachable from {}; using a v0.0.0 base",
                    pattern,
                    shorten_sha1(revision)
                )
            }
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::RevisionIsTagged { tag, revision } => {
                write!(
                    f,
                    "Revision {} is already tagged '{}'; the pseudo-version will sort after it",
                    shorten_sha1(revision),
                    tag
                )
            }
        }
    }
}
