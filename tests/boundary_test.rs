use verbump::boundary::VersionWarning;
use verbump::ui;

// ============================================================================
// VersionWarning Display Tests
// ============================================================================

#[test]
fn test_invalid_version_display() {
    let warning = VersionWarning::InvalidVersion {
        input: "release-candidate".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("release-candidate"),
        "Message should contain the input, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("not a valid version"),
        "Message should explain the problem, got: {}",
        display_msg
    );
}

#[test]
fn test_not_an_upgrade_display() {
    let warning = VersionWarning::NotAnUpgrade {
        from: "1.5.0".to_string(),
        to: "1.2.0".to_string(),
    };

    assert_eq!(warning.to_string(), "'1.2.0' is not newer than '1.5.0'");
}

#[test]
fn test_no_matching_tags_display() {
    let warning = VersionWarning::NoMatchingTags {
        pattern: "v{version}".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("v{version}"),
        "Message should contain pattern 'v{{version}}', got: {}",
        display_msg
    );
}

#[test]
fn test_warning_equality() {
    let a = VersionWarning::InvalidVersion {
        input: "x".to_string(),
    };
    let b = a.clone();
    assert_eq!(a, b);
    assert_ne!(
        a,
        VersionWarning::NoMatchingTags {
            pattern: "x".to_string()
        }
    );
}

#[test]
fn test_display_warning_does_not_panic() {
    ui::display_warning(&VersionWarning::NoMatchingTags {
        pattern: "release-{version}".to_string(),
    });
}
