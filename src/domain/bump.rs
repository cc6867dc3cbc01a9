use super::version::Version;
use crate::error::{Result, VerbumpError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four numeric segments of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Major,
    Minor,
    Patch,
    Build,
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
    Build,
    /// Bump the deepest segment present in the text
    Last,
}

impl FromStr for Segment {
    type Err = VerbumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(Segment::Major),
            "minor" => Ok(Segment::Minor),
            "patch" => Ok(Segment::Patch),
            "build" => Ok(Segment::Build),
            _ => Err(VerbumpError::version(format!(
                "Unknown version segment: '{}' (expected major, minor, patch or build)",
                s
            ))),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::Major => "major",
            Segment::Minor => "minor",
            Segment::Patch => "patch",
            Segment::Build => "build",
        };
        f.write_str(name)
    }
}

impl FromStr for VersionBump {
    type Err = VerbumpError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("last") {
            return Ok(VersionBump::Last);
        }
        s.parse::<Segment>()
            .map(VersionBump::from)
            .map_err(|_| {
                VerbumpError::version(format!(
                    "Unknown bump kind: '{}' (expected major, minor, patch, build or last)",
                    s
                ))
            })
    }
}

impl From<Segment> for VersionBump {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Major => VersionBump::Major,
            Segment::Minor => VersionBump::Minor,
            Segment::Patch => VersionBump::Patch,
            Segment::Build => VersionBump::Build,
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
            VersionBump::Build => "build",
            VersionBump::Last => "last",
        };
        f.write_str(name)
    }
}

/// Deriving new versions.
///
/// Every operation writes out the segments up to the one being changed, appends
/// `.0` for each lower segment the original text had, re-appends the special
/// suffix and parses the result. Segments the original did not have stay absent:
/// bumping the minor part of `1.2` gives `1.3`, of `1.2.3` gives `1.3.0`.
impl Version {
    pub fn bump_major(&self) -> Version {
        self.reset_from_minor(self.major().saturating_add(1).to_string())
    }

    pub fn bump_minor(&self) -> Version {
        self.reset_from_patch(format!(
            "{}.{}",
            self.major(),
            self.minor().saturating_add(1)
        ))
    }

    pub fn bump_patch(&self) -> Version {
        self.reset_from_build(format!(
            "{}.{}.{}",
            self.major(),
            self.minor(),
            self.patch().saturating_add(1)
        ))
    }

    pub fn bump_build(&self) -> Version {
        self.reset_from_special(format!(
            "{}.{}.{}.{}",
            self.major(),
            self.minor(),
            self.patch(),
            self.build().saturating_add(1)
        ))
    }

    /// Bump the deepest present segment: build, then patch, then minor, then major.
    pub fn bump_last_part(&self) -> Version {
        if self.has_build() {
            self.bump_build()
        } else if self.has_patch() {
            self.bump_patch()
        } else if self.has_minor() {
            self.bump_minor()
        } else {
            self.bump_major()
        }
    }

    pub fn set_major(&self, value: u32) -> Version {
        self.reset_from_minor(value.to_string())
    }

    pub fn set_minor(&self, value: u32) -> Version {
        self.reset_from_patch(format!("{}.{}", self.major(), value))
    }

    pub fn set_patch(&self, value: u32) -> Version {
        self.reset_from_build(format!("{}.{}.{}", self.major(), self.minor(), value))
    }

    pub fn set_build(&self, value: u32) -> Version {
        self.reset_from_special(format!(
            "{}.{}.{}.{}",
            self.major(),
            self.minor(),
            self.patch(),
            value
        ))
    }

    /// Bump according to bump type
    pub fn bump(&self, bump_type: VersionBump) -> Version {
        match bump_type {
            VersionBump::Major => self.bump_major(),
            VersionBump::Minor => self.bump_minor(),
            VersionBump::Patch => self.bump_patch(),
            VersionBump::Build => self.bump_build(),
            VersionBump::Last => self.bump_last_part(),
        }
    }

    /// Overwrite one segment
    pub fn set(&self, segment: Segment, value: u32) -> Version {
        match segment {
            Segment::Major => self.set_major(value),
            Segment::Minor => self.set_minor(value),
            Segment::Patch => self.set_patch(value),
            Segment::Build => self.set_build(value),
        }
    }

    fn reset_from_minor(&self, mut text: String) -> Version {
        if self.has_minor() {
            text.push_str(".0");
        }
        self.reset_from_patch(text)
    }

    fn reset_from_patch(&self, mut text: String) -> Version {
        if self.has_patch() {
            text.push_str(".0");
        }
        self.reset_from_build(text)
    }

    fn reset_from_build(&self, mut text: String) -> Version {
        if self.has_build() {
            text.push_str(".0");
        }
        self.reset_from_special(text)
    }

    fn reset_from_special(&self, mut text: String) -> Version {
        if let Some(special) = self.special() {
            // a leading digit only follows the build number after a dot
            if special.starts_with(|c: char| c.is_ascii_digit()) {
                text.push('.');
            }
            text.push_str(special);
        }
        tracing::trace!(from = self.raw_text(), to = text.as_str(), "reparsing derived version");
        Version::parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bumped(text: &str, bump_type: VersionBump) -> String {
        Version::parse(text).bump(bump_type).to_string()
    }

    #[test]
    fn test_bump_patch() {
        assert_eq!(bumped("1.2.3", VersionBump::Patch), "1.2.4");
    }

    #[test]
    fn test_bump_major_resets_present_segments() {
        assert_eq!(bumped("1.2.3", VersionBump::Major), "2.0.0");
        assert_eq!(bumped("1.2", VersionBump::Major), "2.0");
        assert_eq!(bumped("1", VersionBump::Major), "2");
        assert_eq!(bumped("1.2.3.4", VersionBump::Major), "2.0.0.0");
    }

    #[test]
    fn test_bump_minor() {
        assert_eq!(bumped("1.2.3", VersionBump::Minor), "1.3.0");
        assert_eq!(bumped("1.2", VersionBump::Minor), "1.3");
    }

    #[test]
    fn test_bump_below_present_segments_adds_them() {
        assert_eq!(bumped("1", VersionBump::Minor), "1.1");
        assert_eq!(bumped("1", VersionBump::Patch), "1.0.1");
        assert_eq!(bumped("1.2", VersionBump::Build), "1.2.0.1");
    }

    #[test]
    fn test_bump_keeps_special_suffix() {
        assert_eq!(bumped("1.0.0-beta1", VersionBump::Patch), "1.0.1-beta1");
        assert_eq!(bumped("1.0.0-beta1", VersionBump::Build), "1.0.0.1-beta1");
        assert_eq!(bumped("1.0.0-beta1", VersionBump::Major), "2.0.0-beta1");
        assert_eq!(bumped("1.1alpha", VersionBump::Minor), "1.2alpha");

        let version = Version::parse("1.0.0-beta1").bump_patch();
        assert_eq!(version.special(), Some("-beta1"));
        assert!(version.is_beta());
    }

    #[test]
    fn test_bump_keeps_numeric_special_separate() {
        let version = Version::parse("1.2.3.4.5");
        assert_eq!(version.special(), Some("5"));
        assert_eq!(version.bump_build().to_string(), "1.2.3.5.5");
        assert_eq!(version.bump_patch().to_string(), "1.2.4.0.5");
        assert_eq!(version.bump_build().special(), Some("5"));
    }

    #[test]
    fn test_bump_last_part() {
        assert_eq!(bumped("1.2.3.4", VersionBump::Last), "1.2.3.5");
        assert_eq!(bumped("1.2.3", VersionBump::Last), "1.2.4");
        assert_eq!(bumped("1.2", VersionBump::Last), "1.3");
        assert_eq!(bumped("1", VersionBump::Last), "2");
        assert_eq!(bumped("1.2rc", VersionBump::Last), "1.3rc");
    }

    #[test]
    fn test_bump_empty_version() {
        assert_eq!(bumped("", VersionBump::Last), "1");
        assert_eq!(bumped("", VersionBump::Patch), "0.0.1");
    }

    #[test]
    fn test_bump_result_is_greater() {
        for text in ["0.1", "1.2.3", "1.0.0-beta1", "3.9.9.9"] {
            let version = Version::parse(text);
            for bump_type in [
                VersionBump::Major,
                VersionBump::Minor,
                VersionBump::Patch,
                VersionBump::Build,
                VersionBump::Last,
            ] {
                assert!(version.bump(bump_type) > version, "{text} {bump_type}");
            }
        }
    }

    #[test]
    fn test_bump_saturates() {
        let version = Version::parse("4294967295.1");
        assert_eq!(version.bump_major().to_string(), "4294967295.0");
    }

    #[test]
    fn test_set_segments() {
        let version = Version::parse("1.2.3");
        assert_eq!(version.set_major(5).to_string(), "5.0.0");
        assert_eq!(version.set_minor(7).to_string(), "1.7.0");
        assert_eq!(version.set_patch(0).to_string(), "1.2.0");
        assert_eq!(version.set_build(9).to_string(), "1.2.3.9");
        assert_eq!(version.set(Segment::Minor, 4).to_string(), "1.4.0");
    }

    #[test]
    fn test_set_keeps_special_suffix() {
        let version = Version::parse("2.1-rc2");
        assert_eq!(version.set_minor(0).to_string(), "2.0-rc2");
        assert_eq!(version.set_major(3).to_string(), "3.0-rc2");
    }

    #[test]
    fn test_derived_versions_do_not_mutate_source() {
        let version = Version::parse("1.2.3");
        let _ = version.bump_major();
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn test_segment_parse() {
        assert_eq!("Patch".parse::<Segment>().unwrap(), Segment::Patch);
        assert!("last".parse::<Segment>().is_err());
        assert!("revision".parse::<Segment>().is_err());
    }

    #[test]
    fn test_version_bump_parse_and_display() {
        for kind in ["major", "minor", "patch", "build", "last"] {
            let bump_type: VersionBump = kind.parse().unwrap();
            assert_eq!(bump_type.to_string(), kind);
        }
        let err = "huge".parse::<VersionBump>().unwrap_err();
        assert!(err.to_string().contains("Unknown bump kind"));
    }
}
