// tests/config_test.rs
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use verbump::config::{load_config, Config, LOCAL_CONFIG_FILE};
use verbump::{VerbumpError, VersionBump};

/// Restores the working directory when dropped
struct CurrentDirGuard(std::path::PathBuf);

impl CurrentDirGuard {
    fn enter(dir: &std::path::Path) -> Self {
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        CurrentDirGuard(previous)
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.bump.default, VersionBump::Last);
    assert_eq!(config.tags.pattern, "v{version}");
    assert!(!config.update.include_unstable);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[bump]
default = "patch"

[tags]
pattern = "release-{version}"

[update]
include_unstable = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.bump.default, VersionBump::Patch);
    assert_eq!(config.tags.pattern, "release-{version}");
    assert!(config.update.include_unstable);
}

#[test]
fn test_load_fixture() {
    let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/verbump.toml");
    let config = load_config(Some(fixture)).expect("fixture should load");
    assert_eq!(config.bump.default, VersionBump::Minor);
    assert_eq!(config.tags.pattern, "app-{version}");
}

#[test]
fn test_missing_custom_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = load_config(Some(missing.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[bump\ndefault = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Invalid configuration file"));
}

#[test]
fn test_pattern_without_placeholder_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[tags]\npattern = \"release\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    let message = err.to_string();
    assert!(matches!(err, VerbumpError::Config(_)));
    assert!(message.starts_with("Configuration error: tags.pattern"));
    assert!(message.contains("Tag error"));
}

#[test]
#[serial]
fn test_local_file_is_discovered() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[bump]\ndefault = \"major\"\n",
    )
    .unwrap();

    let _guard = CurrentDirGuard::enter(dir.path());
    let config = load_config(None).unwrap();
    assert_eq!(config.bump.default, VersionBump::Major);
}
