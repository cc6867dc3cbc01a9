//! Command logic behind the `verbump` binary.
//!
//! Each function takes plain arguments and returns values, leaving argument
//! parsing and printing to `main`, so the commands can be driven from tests.

use crate::boundary::VersionWarning;
use crate::domain::{Segment, TagPattern, Version, VersionBump};
use crate::error::{Result, VerbumpError};
use crate::git::{tagged_versions, TagSource, TaggedVersion};
use crate::update::{sort_versions, UpdateChecker};
use std::cmp::Ordering;

/// Parse a version given on the command line, rejecting invalid text.
pub fn parse_version_arg(input: &str) -> Result<Version> {
    input.parse()
}

/// Parse for inspection: invalid text is returned with a warning, or an error
/// when `strict` is set.
pub fn inspect(input: &str, strict: bool) -> Result<(Version, Option<VersionWarning>)> {
    let version = Version::parse(input);
    if version.is_valid() {
        return Ok((version, None));
    }
    if strict {
        return Err(VerbumpError::version(format!(
            "Invalid version: '{}'",
            version.raw_text()
        )));
    }
    let warning = VersionWarning::InvalidVersion {
        input: version.raw_text().to_string(),
    };
    Ok((version, Some(warning)))
}

/// Compare two versions
pub fn compare(lhs: &str, rhs: &str) -> Result<Ordering> {
    let lhs = parse_version_arg(lhs)?;
    let rhs = parse_version_arg(rhs)?;
    Ok(lhs.compare(&rhs))
}

/// Bump a version
pub fn bump(input: &str, bump_type: VersionBump) -> Result<Version> {
    Ok(parse_version_arg(input)?.bump(bump_type))
}

/// Overwrite one segment; warns when the result is not newer than the input.
pub fn set(input: &str, segment: Segment, value: u32) -> Result<(Version, Option<VersionWarning>)> {
    let version = parse_version_arg(input)?;
    let updated = version.set(segment, value);
    let warning = (!updated.greater_than(&version)).then(|| VersionWarning::NotAnUpgrade {
        from: version.to_string(),
        to: updated.to_string(),
    });
    Ok((updated, warning))
}

/// Sort versions; invalid ones are kept (they sort first) and reported.
pub fn sort(inputs: &[String], reverse: bool) -> (Vec<Version>, Vec<VersionWarning>) {
    let mut versions: Vec<Version> = inputs.iter().map(|input| Version::parse(input)).collect();
    let warnings = versions
        .iter()
        .filter(|version| !version.is_valid())
        .map(|version| VersionWarning::InvalidVersion {
            input: version.raw_text().to_string(),
        })
        .collect();

    sort_versions(&mut versions);
    if reverse {
        versions.reverse();
    }
    (versions, warnings)
}

/// Arguments for the `latest` command
#[derive(Debug, Clone)]
pub struct LatestArgs {
    /// How release tags are named
    pub pattern: TagPattern,

    /// Installed version to look for an update over
    pub current: Option<Version>,

    /// Consider tags with a special suffix
    pub include_unstable: bool,
}

/// Result of the `latest` command
#[derive(Debug, Clone, PartialEq)]
pub struct LatestReport {
    /// Newest accepted tagged version
    pub newest: Option<TaggedVersion>,

    /// Set when `current` was given and `newest` is newer than it
    pub update: Option<TaggedVersion>,

    pub warnings: Vec<VersionWarning>,
}

/// Find the newest release among the tags of `source`
pub fn latest<S: TagSource + ?Sized>(source: &S, args: &LatestArgs) -> Result<LatestReport> {
    let tagged = tagged_versions(source, &args.pattern)?;
    let mut warnings = Vec::new();
    if tagged.is_empty() {
        warnings.push(VersionWarning::NoMatchingTags {
            pattern: args.pattern.as_str().to_string(),
        });
    }

    let checker = UpdateChecker::new(args.include_unstable);
    let newest = checker
        .newest_by(&tagged, |item| &item.version)
        .cloned();

    let update = args.current.as_ref().and_then(|current| {
        checker
            .find_update_by(current, &tagged, |item| &item.version)
            .cloned()
    });

    Ok(LatestReport {
        newest,
        update,
        warnings,
    })
}
