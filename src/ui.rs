//! Terminal output.
//!
//! `format_*` functions are pure and return text; `display_*` functions print it.
//! Messages go to stdout, problems to stderr.

use crate::boundary::VersionWarning;
use crate::domain::Version;
use console::style;
use std::cmp::Ordering;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a version warning to the user.
pub fn display_warning(warning: &VersionWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Comparison operator for an ordering, as printed by `compare`.
pub fn format_ordering(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

fn format_segment(value: u32, present: bool) -> String {
    if present {
        value.to_string()
    } else {
        format!("{} (absent)", value)
    }
}

/// Describe every field of a parsed version, one `name: value` line each.
pub fn format_version_details(version: &Version) -> Vec<String> {
    let mut lines = vec![
        format!("text:      {}", version.raw_text()),
        format!("valid:     {}", version.is_valid()),
    ];

    if !version.is_valid() {
        return lines;
    }

    lines.push(format!("major:     {}", version.major()));
    lines.push(format!(
        "minor:     {}",
        format_segment(version.minor(), version.has_minor())
    ));
    lines.push(format!(
        "patch:     {}",
        format_segment(version.patch(), version.has_patch())
    ));
    lines.push(format!(
        "build:     {}",
        format_segment(version.build(), version.has_build())
    ));

    if let Some(special) = version.special() {
        lines.push(format!("special:   {}", special));
    }

    let mut flags = Vec::new();
    if version.is_unstable() {
        flags.push("unstable");
    }
    if version.is_alpha() {
        flags.push("alpha");
    }
    if version.is_beta() {
        flags.push("beta");
    }
    if !flags.is_empty() {
        lines.push(format!("flags:     {}", flags.join(", ")));
    }

    lines.push(format!("canonical: {}", version.canonical()));
    if let Some(semver) = version.to_semver() {
        lines.push(format!("semver:    {}", semver));
    }

    lines
}

pub fn display_version_details(version: &Version) {
    println!("{}", style(format!("Version '{}'", version)).bold());
    for line in format_version_details(version) {
        println!("  {}", line);
    }
}
