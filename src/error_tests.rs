//! Tests for HiliteError type

use super::*;

#[test]
fn test_unknown_mode_error_lists_valid_modes() {
    let error = HiliteError::UnknownComparisonMode("fuzzy".to_string());
    let msg = error.to_string();
    assert!(msg.contains("'fuzzy'"));
    assert!(msg.contains("ordinal-ignore-case"));
    assert!(msg.contains("invariant-culture-ignore-case"));
}

#[test]
fn test_invalid_culture_error_display() {
    let error = HiliteError::InvalidCulture("en--US".to_string());
    assert_eq!(error.to_string(), "Invalid culture tag 'en--US'");
}

#[test]
fn test_unknown_sample_error_mentions_list_flag() {
    let error = HiliteError::UnknownSample("odyssey".to_string());
    let msg = error.to_string();
    assert!(msg.contains("odyssey"));
    assert!(msg.contains("--list-samples"));
}

#[test]
fn test_config_error_display_includes_path() {
    let error = HiliteError::Config {
        path: PathBuf::from("/tmp/hilite/config.toml"),
        message: "expected a string".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("/tmp/hilite/config.toml"));
    assert!(msg.contains("expected a string"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = HiliteError::from(io_err);
    assert!(matches!(err, HiliteError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let error = HiliteError::MalformedDelimited("stray end marker".to_string());
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("MalformedDelimited"));
}

#[test]
fn test_invalid_color_error_display() {
    let error = HiliteError::InvalidColor("chartreuse".to_string());
    assert_eq!(error.to_string(), "Unknown color 'chartreuse'");
}
