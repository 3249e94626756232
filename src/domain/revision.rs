/// Length of a full SHA-1 revision in hex digits.
pub const SHA1_HEX_LEN: usize = 40;

/// Canonical length of the revision identifier embedded in pseudo-versions.
pub const SHORT_REVISION_LEN: usize = 12;

/// Reports whether `rev` consists entirely of lower-case hexadecimal digits.
pub fn is_all_hex(rev: &str) -> bool {
    rev.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f'))
}

/// Shortens a full SHA-1 hash (40 lower-case hex digits) to the canonical
/// 12-digit form used in pseudo-versions.
///
/// Anything else (already short hashes, upper-case hex, identifiers from
/// other revision schemes) is returned unchanged.
///
/// # Example
/// ```
/// use git_pseudoversion::domain::revision::shorten_sha1;
///
/// assert_eq!(
///     shorten_sha1("0123456789abcdef0123456789abcdef01234567"),
///     "0123456789ab"
/// );
/// assert_eq!(shorten_sha1("beef"), "beef");
/// ```
pub fn shorten_sha1(rev: &str) -> &str {
    if rev.len() == SHA1_HEX_LEN && is_all_hex(rev) {
        &rev[..SHORT_REVISION_LEN]
    } else {
        rev
    }
}
