use crate::domain::{TagPattern, VersionBump};
use crate::error::{Result, VerbumpError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "verbump.toml";
/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".verbump.toml";

/// Represents the complete configuration for verbump.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub bump: BumpConfig,

    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub update: UpdateConfig,
}

/// Returns the default bump kind.
fn default_bump() -> VersionBump {
    VersionBump::Last
}

/// Returns the default tag pattern.
fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

/// Settings for the `bump` command.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BumpConfig {
    #[serde(default = "default_bump")]
    pub default: VersionBump,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            default: default_bump(),
        }
    }
}

/// How release tags are named.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            pattern: default_tag_pattern(),
        }
    }
}

impl TagsConfig {
    /// Compile the configured pattern
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.pattern.as_str())
    }
}

/// Settings for update checks.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct UpdateConfig {
    #[serde(default)]
    pub include_unstable: bool,
}

/// Finds the configuration file to use, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `verbump.toml` in current directory
/// 3. `.verbump.toml` in user config directory
pub fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed, or a custom path is missing
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = find_config_file(config_path) else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)?;
    config.tags.tag_pattern().map_err(|e| {
        VerbumpError::config(format!("tags.pattern in {}: {}", path.display(), e))
    })?;
    Ok(config)
}
