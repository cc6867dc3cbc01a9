use super::version::Version;
use crate::error::{Result, VerbumpError};
use regex::Regex;

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
    matcher: Regex,
}

impl TagPattern {
    /// Create a new tag pattern
    ///
    /// The pattern must contain exactly one `{version}` placeholder; the rest is
    /// matched literally.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches(PLACEHOLDER).count() != 1 {
            return Err(VerbumpError::tag(format!(
                "Pattern '{}' must contain exactly one {} placeholder",
                pattern, PLACEHOLDER
            )));
        }

        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\{version\}", "(.+)");
        let matcher = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| VerbumpError::tag(format!("Invalid pattern '{}': {}", pattern, e)))?;

        Ok(TagPattern { pattern, matcher })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace(PLACEHOLDER, version.raw_text())
    }

    /// Extract the version from a tag following this pattern.
    ///
    /// Returns `None` when the tag does not fit the pattern or the embedded text
    /// is not a valid, non-empty version.
    pub fn extract(&self, tag: &str) -> Option<Version> {
        let captures = self.matcher.captures(tag)?;
        Version::try_parse(captures.get(1)?.as_str()).filter(|version| !version.is_empty())
    }

    /// Validate if a tag matches this pattern
    pub fn matches(&self, tag: &str) -> bool {
        self.extract(tag).is_some()
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::new("v{version}").expect("default tag pattern is valid")
    }
}
