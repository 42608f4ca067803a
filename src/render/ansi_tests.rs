use super::*;
use crate::highlight::{ComparisonMode, highlight};

#[test]
fn test_parse_color_names() {
    assert_eq!(parse_color("yellow").unwrap(), Color::Yellow);
    assert_eq!(parse_color(" Dark_Blue ").unwrap(), Color::DarkBlue);
}

#[test]
fn test_parse_unknown_color() {
    let err = parse_color("chartreuse").unwrap_err();
    assert!(matches!(err, HiliteError::InvalidColor(ref s) if s == "chartreuse"));
}

#[test]
fn test_style_from_config() {
    let config = OutputConfig {
        foreground: "white".to_string(),
        background: "red".to_string(),
        ..OutputConfig::default()
    };
    let style = AnsiStyle::from_config(&config).unwrap();
    assert_eq!(style.foreground, Color::White);
    assert_eq!(style.background, Color::Red);
}

#[test]
fn test_default_config_matches_default_style() {
    let style = AnsiStyle::from_config(&OutputConfig::default()).unwrap();
    assert_eq!(style, AnsiStyle::default());
}

#[test]
fn test_plain_text_is_untouched() {
    let rendered = to_ansi(
        highlight("nothing here", "xyz", ComparisonMode::Ordinal),
        &AnsiStyle::default(),
    );
    assert_eq!(rendered, "nothing here");
}

#[test]
fn test_matches_keep_their_text() {
    let rendered = to_ansi(
        highlight("one Two three", "two", ComparisonMode::OrdinalIgnoreCase),
        &AnsiStyle::default(),
    );
    assert!(rendered.starts_with("one "));
    assert!(rendered.ends_with(" three"));
    assert!(rendered.contains("Two"));
}

#[test]
fn test_match_is_wrapped_in_escape_sequences() {
    let ansi = AnsiStyle::default();
    let rendered = to_ansi(highlight("a b", "b", ComparisonMode::Ordinal), &ansi);

    let styled = style("b")
        .with(Color::Black)
        .on(Color::Yellow)
        .attribute(Attribute::Bold)
        .to_string();
    assert!(styled.starts_with('\u{1b}'));
    assert_eq!(rendered, format!("a {styled}"));
}
