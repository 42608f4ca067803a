use super::*;
use crate::highlight::{ComparisonMode, highlight};
use insta::assert_snapshot;

#[test]
fn test_encode_wraps_matches() {
    let encoded = encode(highlight("the cat sat", "at", ComparisonMode::OrdinalIgnoreCase));
    assert_snapshot!(encoded, @"the c|~S~|at|~E~| s|~S~|at|~E~|");
}

#[test]
fn test_encode_without_matches_is_identity() {
    let encoded = encode(highlight("hello world", "xyz", ComparisonMode::Ordinal));
    assert_eq!(encoded, "hello world");
    assert_eq!(encode(highlight("", "xyz", ComparisonMode::Ordinal)), "");
}

#[test]
fn test_decode_restores_segments() {
    let segments = decode("The |~S~|cat|~E~| sat").unwrap();
    assert_eq!(
        segments,
        vec![
            Segment::plain("The "),
            Segment::matched("cat"),
            Segment::plain(" sat")
        ]
    );
}

#[test]
fn test_decode_of_encode_matches_highlight() {
    let text = "aaaa and AA";
    let original: Vec<_> = highlight(text, "aa", ComparisonMode::OrdinalIgnoreCase).collect();
    let encoded = encode(original.iter().copied());
    assert_eq!(decode(&encoded).unwrap(), original);
}

#[test]
fn test_decode_plain_text() {
    assert_eq!(decode("no markers").unwrap(), vec![Segment::plain("no markers")]);
    assert!(decode("").unwrap().is_empty());
}

#[test]
fn test_decode_drops_empty_spans() {
    assert_eq!(decode("|~S~||~E~|x").unwrap(), vec![Segment::plain("x")]);
}

#[test]
fn test_decode_rejects_nested_start() {
    let err = decode("|~S~|a|~S~|b|~E~|").unwrap_err();
    assert!(matches!(err, HiliteError::MalformedDelimited(ref m) if m.contains("nested")));
}

#[test]
fn test_decode_rejects_stray_end() {
    let err = decode("a|~E~|").unwrap_err();
    assert!(err.to_string().contains("end marker without start at byte 1"));
}

#[test]
fn test_decode_rejects_unterminated_start() {
    let err = decode("ab|~S~|cd").unwrap_err();
    assert!(err.to_string().contains("start marker at byte 2 is never closed"));
}
