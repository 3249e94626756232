//! Pseudo-version synthesis
//!
//! A pseudo-version names an untagged revision with a semantic version that
//! embeds the commit time and a short revision id, and sorts after the
//! nearest preceding tag:
//!
//! | base tag            | form                                          |
//! |---------------------|-----------------------------------------------|
//! | none / not semver   | `vX.0.0-yyyymmddhhmmss-abcdefabcdef`          |
//! | `vX.Y.Z[+b]`        | `vX.Y.(Z+1)-0.yyyymmddhhmmss-abcdefabcdef[+b]`|
//! | `vX.Y.Z-pre[+b]`    | `vX.Y.Z-pre.0.yyyymmddhhmmss-abcdefabcdef[+b]`|

use chrono::{DateTime, Datelike, TimeZone, Utc};
use tracing::debug;

use super::decimal::increment_decimal;
use super::semver::{classify, Classification};

/// `strftime` layout of the timestamp segment after the year.
pub const PSEUDO_VERSION_TIMESTAMP_FORMAT: &str = "%m%d%H%M%S";

/// Major prefix used when none is supplied.
pub const DEFAULT_MAJOR: &str = "v0";

/// Which output layout a pseudo-version takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PseudoVersionForm {
    /// No usable base version.
    Untagged,
    /// Base is a plain release; its patch is incremented.
    Release,
    /// Base already has a pre-release label that gets extended.
    Prerelease,
}

/// Picks the layout for an already classified base version.
pub fn select_form(base: &Classification) -> PseudoVersionForm {
    match base {
        Classification::Invalid => PseudoVersionForm::Untagged,
        Classification::Release { .. } => PseudoVersionForm::Release,
        Classification::Prerelease { .. } => PseudoVersionForm::Prerelease,
    }
}

/// Formats the `yyyymmddhhmmss-rev` segment shared by every form.
///
/// The year is written as bare digits, at least four of them: `%Y` would
/// prefix years past 9999 with `+`, which starts semver build metadata.
pub fn timestamp_segment<Tz: TimeZone>(t: &DateTime<Tz>, rev: &str) -> String {
    let utc = t.with_timezone(&Utc);
    format!(
        "{:04}{}-{}",
        utc.year().unsigned_abs(),
        utc.format(PSEUDO_VERSION_TIMESTAMP_FORMAT),
        rev
    )
}

/// Returns a pseudo-version for the given major version (`"v1"`, empty means
/// `"v0"`), the preceding tagged version (`""`, `"v1.2.3"` or `"v1.2.3-pre"`),
/// the revision time, and the revision identifier (usually a 12-digit commit
/// hash prefix, see [`shorten_sha1`](super::revision::shorten_sha1)).
///
/// The result always parses as a semantic version. A malformed `older` is not
/// an error; it is handled as if there were no tag at all.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use git_pseudoversion::domain::pseudo::pseudo_version;
///
/// let t = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(
///     pseudo_version("", "v1.2.3", &t, "abcdef012345"),
///     "v1.2.4-0.20230102030405-abcdef012345"
/// );
/// ```
pub fn pseudo_version<Tz: TimeZone>(
    major: &str,
    older: &str,
    t: &DateTime<Tz>,
    rev: &str,
) -> String {
    let major = if major.is_empty() { DEFAULT_MAJOR } else { major };
    let segment = timestamp_segment(t, rev);
    let base = classify(older);
    let form = select_form(&base);
    debug!(older, base = %base, ?form, "selected pseudo-version form");

    match base {
        Classification::Invalid => untagged(major, &segment),
        Classification::Release { canonical, build } => {
            after_release(&canonical, &build, &segment)
        }
        Classification::Prerelease { canonical, build } => {
            after_prerelease(&canonical, &build, &segment)
        }
    }
}

fn untagged(major: &str, segment: &str) -> String {
    format!("{}.0.0-{}", major, segment)
}

fn after_prerelease(canonical: &str, build: &str, segment: &str) -> String {
    format!("v{}.0.{}{}", canonical, segment, build)
}

fn after_release(canonical: &str, build: &str, segment: &str) -> String {
    // Release canonicals are always MAJOR.MINOR.PATCH.
    let i = canonical.rfind('.').map_or(0, |i| i + 1);
    let (prefix, patch) = canonical.split_at(i);
    format!(
        "v{}{}-0.{}{}",
        prefix,
        increment_decimal(patch),
        segment,
        build
    )
}
