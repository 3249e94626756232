//! Domain logic - pure pseudo-version rules independent of git operations

pub mod decimal;
pub mod pseudo;
pub mod revision;
pub mod semver;
pub mod tag;

pub use decimal::increment_decimal;
pub use pseudo::{pseudo_version, select_form, PseudoVersionForm};
pub use revision::shorten_sha1;
pub use self::semver::{classify, Classification};
pub use tag::TagPattern;
