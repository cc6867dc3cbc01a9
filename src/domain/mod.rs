//! Domain logic - version values, ordering, derivation and tag patterns

pub mod bump;
pub mod compare;
pub mod tag;
pub mod version;

pub use bump::{Segment, VersionBump};
pub use tag::TagPattern;
pub use version::Version;
