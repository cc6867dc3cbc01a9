//! Tag sources
//!
//! Release versions usually live in a repository's tags. The [TagSource] trait
//! abstracts where tag names come from so update checks can run against a real
//! repository ([repository::Git2TagSource]) or a fixed list in tests
//! ([mock::MockTagSource]).
//!
//! ```rust
//! # use verbump::git::{tagged_versions, MockTagSource};
//! # use verbump::TagPattern;
//! let source = MockTagSource::new(["v1.0.0", "v1.1.0", "nightly"]);
//! let versions = tagged_versions(&source, &TagPattern::default()).unwrap();
//! assert_eq!(versions.len(), 2);
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::Git2TagSource;

use crate::domain::{TagPattern, Version};
use crate::error::Result;

/// A tag together with the version parsed out of it
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedVersion {
    pub tag: String,
    pub version: Version,
}

/// Anything that can list tag names
pub trait TagSource {
    /// All tag names, sorted alphabetically.
    fn list_tags(&self) -> Result<Vec<String>>;
}

/// Collect the tags that follow `pattern`, paired with their versions.
///
/// Tags that do not fit the pattern, or whose version part is not a valid
/// version, are skipped.
pub fn tagged_versions<S: TagSource + ?Sized>(
    source: &S,
    pattern: &TagPattern,
) -> Result<Vec<TaggedVersion>> {
    let tags = source.list_tags()?;
    let mut tagged = Vec::with_capacity(tags.len());

    for tag in tags {
        match pattern.extract(&tag) {
            Some(version) => tagged.push(TaggedVersion { tag, version }),
            None => {
                tracing::debug!(tag = tag.as_str(), pattern = pattern.as_str(), "skipping tag")
            }
        }
    }

    Ok(tagged)
}
