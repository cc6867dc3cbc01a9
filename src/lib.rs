pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod ui;
pub mod update;

pub use domain::{Segment, TagPattern, Version, VersionBump};
pub use error::{Result, VerbumpError};
pub use update::UpdateChecker;
