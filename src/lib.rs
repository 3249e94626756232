pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use domain::{classify, increment_decimal, pseudo_version, shorten_sha1};
pub use error::{PseudoVersionError, Result};
