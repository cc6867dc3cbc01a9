use std::fmt;

/// Non-fatal issues found while handling versions.
/// These are reported to the user but do not stop the command.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionWarning {
    /// Text does not start with a version number
    InvalidVersion { input: String },
    /// Setting a segment produced a version that is not newer
    NotAnUpgrade { from: String, to: String },
    /// No tag in the repository follows the configured pattern
    NoMatchingTags { pattern: String },
}

impl fmt::Display for VersionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionWarning::InvalidVersion { input } => {
                write!(f, "'{}' is not a valid version", input)
            }
            VersionWarning::NotAnUpgrade { from, to } => {
                write!(f, "'{}' is not newer than '{}'", to, from)
            }
            VersionWarning::NoMatchingTags { pattern } => {
                write!(f, "No tags match pattern '{}'", pattern)
            }
        }
    }
}
