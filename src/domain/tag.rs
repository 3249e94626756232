use crate::error::{PseudoVersionError, Result};
use regex::Regex;

/// Placeholder standing for the version inside a tag pattern.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Default tag naming pattern.
pub const DEFAULT_TAG_PATTERN: &str = "v{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
    regex: Regex,
}

impl TagPattern {
    /// Compile a tag pattern. The pattern must contain `{version}` exactly once.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches(VERSION_PLACEHOLDER).count() != 1 {
            return Err(PseudoVersionError::tag(format!(
                "Pattern '{}' must contain the {} placeholder exactly once",
                pattern, VERSION_PLACEHOLDER
            )));
        }

        // Escape everything, then open up the placeholder to semver characters
        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"(?P<version>[0-9A-Za-z.+\-]+)");
        let regex = Regex::new(&format!("^{}$", regex_pattern)).map_err(|e| {
            PseudoVersionError::tag(format!("Invalid pattern '{}': {}", pattern, e))
        })?;

        Ok(TagPattern { pattern, regex })
    }

    /// Validate if a tag matches this pattern
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }

    /// Extract the version of a matching tag, normalized to a `v`-prefixed
    /// candidate ("release-1.2.3" -> "v1.2.3"). `None` if the tag doesn't match.
    pub fn version_of(&self, tag: &str) -> Option<String> {
        let captures = self.regex.captures(tag)?;
        let version = captures.name("version")?.as_str();
        Some(format!("v{}", version.strip_prefix('v').unwrap_or(version)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matches() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert!(pattern.matches("v1.2.3"));
        assert!(pattern.matches("v1.2.3-rc.1+build.7"));
        assert!(!pattern.matches("release-1.2.3"));
    }

    #[test]
    fn test_version_of_default() {
        let pattern = TagPattern::new(DEFAULT_TAG_PATTERN).unwrap();
        assert_eq!(pattern.version_of("v1.2.3").as_deref(), Some("v1.2.3"));
        assert_eq!(pattern.version_of("1.2.3"), None);
    }

    #[test]
    fn test_version_of_custom_prefix() {
        let pattern = TagPattern::new("release-{version}").unwrap();
        assert_eq!(
            pattern.version_of("release-2.0.0-beta").as_deref(),
            Some("v2.0.0-beta")
        );
        assert_eq!(pattern.version_of("release-v2.0.0").as_deref(), Some("v2.0.0"));
        assert_eq!(pattern.version_of("v2.0.0"), None);
    }

    #[test]
    fn test_version_of_bare_pattern() {
        let pattern = TagPattern::new("{version}").unwrap();
        assert_eq!(pattern.version_of("1.0.0").as_deref(), Some("v1.0.0"));
        assert_eq!(pattern.version_of("v1.0.0").as_deref(), Some("v1.0.0"));
    }

    #[test]
    fn test_pattern_requires_placeholder() {
        assert!(TagPattern::new("v").is_err());
        assert!(TagPattern::new("{version}-{version}").is_err());
    }

    #[test]
    fn test_pattern_escapes_metacharacters() {
        let pattern = TagPattern::new("pkg/a.b@{version}").unwrap();
        assert!(pattern.matches("pkg/a.b@1.0.0"));
        assert!(!pattern.matches("pkg/aXb@1.0.0"));
    }
}
