use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::tag::DEFAULT_TAG_PATTERN;
use crate::domain::TagPattern;
use crate::error::{PseudoVersionError, Result};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "pseudoversion.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE_NAME: &str = ".pseudoversion.toml";

/// Represents the complete configuration for git-pseudoversion.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Major version prefix for untagged revisions (e.g., "v2")
    #[serde(default)]
    pub major: Option<String>,

    #[serde(default)]
    pub tags: TagsConfig,
}

fn default_tags_enabled() -> bool {
    true
}

fn default_tag_pattern() -> String {
    DEFAULT_TAG_PATTERN.to_string()
}

/// Configuration for base tag discovery.
///
/// When disabled, every revision is treated as untagged.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tags_enabled")]
    pub enabled: bool,

    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            enabled: default_tags_enabled(),
            pattern: default_tag_pattern(),
        }
    }
}

impl Config {
    /// Compile the configured tag pattern
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.tags.pattern.as_str())
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if let Some(major) = &self.major {
            validate_major(major)?;
        }
        self.tag_pattern()?;
        Ok(())
    }
}

/// Checks that a major prefix looks like "v0", "v2", ...
pub fn validate_major(major: &str) -> Result<()> {
    let digits = major.strip_prefix('v').unwrap_or("");
    let well_formed = !digits.is_empty()
        && digits.bytes().all(|c| c.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'));
    if well_formed {
        Ok(())
    } else {
        Err(PseudoVersionError::config(format!(
            "Invalid major version '{}': expected v<number> such as v0 or v2",
            major
        )))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `pseudoversion.toml` in current directory
/// 3. `.pseudoversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}
