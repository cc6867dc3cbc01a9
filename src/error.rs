use thiserror::Error;

/// Unified error type for verbump operations
#[derive(Error, Debug)]
pub enum VerbumpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in verbump
pub type Result<T> = std::result::Result<T, VerbumpError>;

impl VerbumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VerbumpError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VerbumpError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        VerbumpError::Tag(msg.into())
    }
}
