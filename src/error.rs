use thiserror::Error;

/// Unified error type for gathering pseudo-version inputs.
///
/// Version synthesis itself never fails; every variant here belongs to
/// reading the repository, the configuration, or the command line.
#[derive(Error, Debug)]
pub enum PseudoVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Revision error: {0}")]
    Revision(String),

    #[error("Invalid commit time: {0}")]
    Timestamp(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-pseudoversion
pub type Result<T> = std::result::Result<T, PseudoVersionError>;

impl PseudoVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PseudoVersionError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        PseudoVersionError::Tag(msg.into())
    }

    /// Create a revision error with context
    pub fn revision(msg: impl Into<String>) -> Self {
        PseudoVersionError::Revision(msg.into())
    }

    /// Create a timestamp error with context
    pub fn timestamp(msg: impl Into<String>) -> Self {
        PseudoVersionError::Timestamp(msg.into())
    }
}
