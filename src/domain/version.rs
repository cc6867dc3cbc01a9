use crate::error::{Result, VerbumpError};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

/// Number of numeric segments a version can carry: major, minor, patch and build.
pub const SEGMENT_COUNT: usize = 4;

static GRAMMAR: OnceLock<Regex> = OnceLock::new();

/// Digits, up to three more digit groups each led by an optional dot, then anything left over.
fn grammar() -> &'static Regex {
    GRAMMAR.get_or_init(|| {
        Regex::new(
            r"(?s)^(?P<major>[0-9]+)(\.?(?P<minor>[0-9]+))?(\.?(?P<patch>[0-9]+))?(\.?(?P<build>[0-9]+))?(\.?(?P<special>.+))?",
        )
        .expect("version grammar is a valid regex")
    })
}

/// A loosely formatted version such as `1.2`, `2.0.1.15` or `1.0.0-beta1`.
///
/// Values are only produced by [`Version::parse`] (or the bump/set operations,
/// which reparse a synthesized string) and never change afterwards. Parsing never
/// fails: text that does not start with a digit yields a version whose
/// [`is_valid`](Version::is_valid) is false, and empty text yields [`Version::EMPTY`].
///
/// Displaying a version returns the trimmed input verbatim; use
/// [`canonical`](Version::canonical) for a reconstructed numeric form.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    major: u32,
    minor: u32,
    patch: u32,
    build: u32,
    has_minor: bool,
    has_patch: bool,
    has_build: bool,
    special: Option<String>,
    is_valid: bool,
}

impl Version {
    /// The valid, empty version produced for empty or whitespace-only input.
    pub const EMPTY: Version = Version {
        raw: String::new(),
        major: 0,
        minor: 0,
        patch: 0,
        build: 0,
        has_minor: false,
        has_patch: false,
        has_build: false,
        special: None,
        is_valid: true,
    };

    /// Parse a version from arbitrary text.
    ///
    /// The input is trimmed first. Each numeric segment after the major one is
    /// accepted only when the previous one was; whatever follows the last accepted
    /// segment becomes the special suffix.
    ///
    /// # Example
    /// ```
    /// use verbump::Version;
    ///
    /// let v = Version::parse("1.0.0-beta1");
    /// assert_eq!(v.patch(), 0);
    /// assert_eq!(v.special(), Some("-beta1"));
    /// assert!(v.is_beta());
    /// assert!(!Version::parse("beta").is_valid());
    /// ```
    pub fn parse(text: &str) -> Version {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Version::EMPTY;
        }

        match Self::match_grammar(trimmed) {
            Some(version) => version,
            None => {
                tracing::debug!(input = trimmed, "text does not match the version grammar");
                Version::invalid(trimmed)
            }
        }
    }

    /// Parse optional text, treating `None` like empty input.
    pub fn parse_optional(text: Option<&str>) -> Version {
        text.map(Version::parse).unwrap_or(Version::EMPTY)
    }

    /// Parse text and keep the result only if it matched the grammar.
    pub fn try_parse(text: &str) -> Option<Version> {
        let version = Version::parse(text);
        version.is_valid.then_some(version)
    }

    fn invalid(text: &str) -> Version {
        Version {
            raw: text.to_string(),
            is_valid: false,
            ..Version::EMPTY
        }
    }

    fn match_grammar(text: &str) -> Option<Version> {
        let captures = grammar().captures(text)?;
        // Digit groups that overflow are treated as a failed match.
        let major = captures.name("major")?.as_str().parse::<u32>().ok()?;

        let mut version = Version {
            raw: text.to_string(),
            major,
            ..Version::EMPTY
        };

        if let Some(minor) = captures.name("minor") {
            version.minor = minor.as_str().parse().ok()?;
            version.has_minor = true;

            if let Some(patch) = captures.name("patch") {
                version.patch = patch.as_str().parse().ok()?;
                version.has_patch = true;

                if let Some(build) = captures.name("build") {
                    version.build = build.as_str().parse().ok()?;
                    version.has_build = true;
                }
            }
        }

        version.special = captures
            .name("special")
            .map(|special| special.as_str().to_string());

        Some(version)
    }

    /// The trimmed input this version was parsed from.
    pub fn raw_text(&self) -> &str {
        &self.raw
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn build(&self) -> u32 {
        self.build
    }

    pub fn has_minor(&self) -> bool {
        self.has_minor
    }

    pub fn has_patch(&self) -> bool {
        self.has_patch
    }

    pub fn has_build(&self) -> bool {
        self.has_build
    }

    /// Text left over after the last numeric segment, e.g. `alpha2` or `-rc1`.
    pub fn special(&self) -> Option<&str> {
        self.special.as_deref()
    }

    /// Whether the input matched the version grammar. Empty input counts as valid.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// True for the valid, empty version.
    pub fn is_empty(&self) -> bool {
        self.is_valid && self.raw.is_empty()
    }

    /// A version carrying a special suffix is considered unstable.
    pub fn is_unstable(&self) -> bool {
        self.special.is_some()
    }

    /// Case-sensitive: `1.0Alpha` is unstable but not alpha.
    pub fn is_alpha(&self) -> bool {
        self.special().is_some_and(|special| special.contains("alpha"))
    }

    pub fn is_beta(&self) -> bool {
        self.special().is_some_and(|special| special.contains("beta"))
    }

    /// Number of numeric segments present in the text, major included.
    pub fn part_count(&self) -> usize {
        if self.has_build {
            4
        } else if self.has_patch {
            3
        } else if self.has_minor {
            2
        } else {
            1
        }
    }

    /// All four numeric segments; absent ones read as zero.
    pub fn numeric_parts(&self) -> [u32; SEGMENT_COUNT] {
        [self.major, self.minor, self.patch, self.build]
    }

    /// Segment texts used for tie-breaking: the digits of each segment ("0" when
    /// absent), with the special suffix glued to the last present segment.
    pub(crate) fn segment_texts(&self) -> [String; SEGMENT_COUNT] {
        let mut texts = self.numeric_parts().map(|part| part.to_string());
        if let Some(special) = &self.special {
            texts[self.part_count() - 1].push_str(special);
        }
        texts
    }

    /// Rebuild `major[.minor[.patch[.build]]]` from the present segments.
    ///
    /// The special suffix is not included.
    pub fn canonical(&self) -> String {
        self.numeric_parts()[..self.part_count()]
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Convert to a [`semver::Version`] when the suffix is a valid pre-release.
    ///
    /// A leading `-` or `.` is dropped from the suffix and a present build segment
    /// becomes build metadata. Invalid and empty versions have no equivalent.
    pub fn to_semver(&self) -> Option<semver::Version> {
        if !self.is_valid || self.raw.is_empty() {
            return None;
        }

        let mut version = semver::Version::new(
            u64::from(self.major),
            u64::from(self.minor),
            u64::from(self.patch),
        );

        if let Some(special) = self.special() {
            let identifier = special.trim_start_matches(['-', '.']);
            version.pre = semver::Prerelease::new(identifier).ok()?;
        }

        if self.has_build {
            version.build = semver::BuildMetadata::new(&self.build.to_string()).ok()?;
        }

        Some(version)
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::EMPTY
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Version {
    type Err = VerbumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::try_parse(s)
            .ok_or_else(|| VerbumpError::version(format!("Invalid version: '{}'", s.trim())))
    }
}

// Must agree with `equals`, which ignores the raw text.
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_valid.hash(state);
        self.numeric_parts().hash(state);
        self.special.hash(state);
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Version::parse(&text))
    }
}
