//! Classification of candidate semantic versions
//!
//! A base version is either unusable, a plain release, or a pre-release.
//! Invalid input is an ordinary outcome here, not an error: a tag that is not
//! a semantic version simply means there is no base to build on.
//!
//! Grammar follows https://semver.org (`MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`)
//! with an optional leading `v`. The `v`-prefixed shorthands `vMAJOR` and
//! `vMAJOR.MINOR` are accepted and padded with zeros.

use std::cmp::Ordering;
use std::fmt;

use ::semver::{BuildMetadata, Prerelease};

/// Outcome of classifying a candidate version string.
///
/// `canonical` never carries the `v` prefix nor build metadata;
/// `build` is the verbatim build suffix including its leading `+`, or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Absent, empty, or not a semantic version.
    Invalid,
    /// `MAJOR.MINOR.PATCH` without a pre-release label.
    Release { canonical: String, build: String },
    /// `MAJOR.MINOR.PATCH-PRERELEASE`.
    Prerelease { canonical: String, build: String },
}

impl Classification {
    /// Canonical form, or the empty string when invalid.
    pub fn canonical(&self) -> &str {
        match self {
            Classification::Invalid => "",
            Classification::Release { canonical, .. }
            | Classification::Prerelease { canonical, .. } => canonical,
        }
    }

    /// Build metadata including the leading `+`, or the empty string.
    pub fn build_metadata(&self) -> &str {
        match self {
            Classification::Invalid => "",
            Classification::Release { build, .. } | Classification::Prerelease { build, .. } => {
                build
            }
        }
    }

    /// True when the version carries a pre-release label.
    pub fn has_prerelease(&self) -> bool {
        matches!(self, Classification::Prerelease { .. })
    }

    /// True unless the input was rejected.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Classification::Invalid)
    }

    /// Compares two classifications by semantic-version precedence.
    ///
    /// Build metadata is ignored and `Invalid` sorts below everything.
    /// Numeric components are compared as digit strings, so they may exceed
    /// any integer width.
    pub fn cmp_precedence(&self, other: &Classification) -> Ordering {
        match (self.is_valid(), other.is_valid()) {
            (false, false) => return Ordering::Equal,
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            (true, true) => {}
        }

        let (core, pre) = split_prerelease(self.canonical());
        let (other_core, other_pre) = split_prerelease(other.canonical());
        for (a, b) in core.split('.').zip(other_core.split('.')) {
            let ord = cmp_numeric(a, b);
            if ord != Ordering::Equal {
                return ord;
            }
        }

        // A release has higher precedence than any of its pre-releases
        match (pre.is_empty(), other_pre.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                match (Prerelease::new(pre), Prerelease::new(other_pre)) {
                    (Ok(a), Ok(b)) => a.cmp(&b),
                    _ => pre.cmp(other_pre),
                }
            }
        }
    }
}

/// Splits `MAJOR.MINOR.PATCH-PRE` at the first `-`.
fn split_prerelease(canonical: &str) -> (&str, &str) {
    match canonical.split_once('-') {
        Some((core, pre)) => (core, pre),
        None => (canonical, ""),
    }
}

/// Orders digit strings without leading zeros.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// A numeric component: `0`, or digits without a leading zero.
fn is_numeric_component(part: &str) -> bool {
    !part.is_empty()
        && part.bytes().all(|c| c.is_ascii_digit())
        && (part == "0" || !part.starts_with('0'))
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Invalid => write!(f, "invalid"),
            Classification::Release { canonical, build } => {
                write!(f, "release {}{}", canonical, build)
            }
            Classification::Prerelease { canonical, build } => {
                write!(f, "pre-release {}{}", canonical, build)
            }
        }
    }
}

/// Classifies `version` as invalid, release, or pre-release.
///
/// # Example
/// ```
/// use git_pseudoversion::domain::semver::classify;
///
/// let c = classify("v1.2.3-rc.1+exp");
/// assert_eq!(c.canonical(), "1.2.3-rc.1");
/// assert_eq!(c.build_metadata(), "+exp");
/// assert!(c.has_prerelease());
///
/// assert_eq!(classify("not-a-version").canonical(), "");
/// ```
pub fn classify(version: &str) -> Classification {
    let (prefixed, body) = match version.strip_prefix('v') {
        Some(rest) => (true, rest),
        None => (false, version),
    };
    if body.is_empty() {
        return Classification::Invalid;
    }

    let expanded = if prefixed {
        expand_shorthand(body)
    } else {
        body.to_string()
    };

    // `+` cannot appear before the build suffix, nor `-` inside the core
    let (canonical, build) = match expanded.find('+') {
        Some(i) => (&expanded[..i], &expanded[i..]),
        None => (expanded.as_str(), ""),
    };
    let (core, pre) = match canonical.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (canonical, None),
    };

    // The core is checked by hand so components are not limited to u64
    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() != 3 || !parts.iter().all(|p| is_numeric_component(p)) {
        return Classification::Invalid;
    }
    if let Some(pre) = pre {
        if pre.is_empty() || Prerelease::new(pre).is_err() {
            return Classification::Invalid;
        }
    }
    if let Some(meta) = build.strip_prefix('+') {
        if meta.is_empty() || BuildMetadata::new(meta).is_err() {
            return Classification::Invalid;
        }
    }

    let canonical = canonical.to_string();
    let build = build.to_string();
    if pre.is_none() {
        Classification::Release { canonical, build }
    } else {
        Classification::Prerelease { canonical, build }
    }
}

/// Pads `MAJOR` and `MAJOR.MINOR` to three components. Shorthands cannot
/// carry a pre-release or build suffix, so those are left for the core check
/// to reject.
fn expand_shorthand(body: &str) -> String {
    if body.contains(['-', '+']) {
        return body.to_string();
    }
    match body.matches('.').count() {
        0 => format!("{}.0.0", body),
        1 => format!("{}.0", body),
        _ => body.to_string(),
    }
}
