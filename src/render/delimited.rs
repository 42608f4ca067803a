//! Delimiter encoding of highlighted text
//!
//! Matched spans are wrapped in `|~S~|` and `|~E~|` so a highlighted text can
//! travel as a single string, e.g. through a binding that only carries text.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

use crate::error::HiliteError;
use crate::highlight::Segment;

pub const MATCH_START: &str = "|~S~|";
pub const MATCH_END: &str = "|~E~|";

const START_PATTERN: usize = 0;

// One automaton finds both markers in a single pass; shared by every decode.
static MARKERS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new([MATCH_START, MATCH_END]).expect("delimiter markers are valid patterns")
});

/// Encode segments, wrapping every matched segment in the markers
pub fn encode<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = Segment<'a>>,
{
    let mut out = String::new();
    for segment in segments {
        if segment.is_match {
            out.push_str(MATCH_START);
            out.push_str(segment.text);
            out.push_str(MATCH_END);
        } else {
            out.push_str(segment.text);
        }
    }
    out
}

/// Decode a delimited string back into segments.
///
/// Empty spans are dropped. Nested start markers, end markers without a
/// start, and unterminated starts are errors.
pub fn decode(text: &str) -> Result<Vec<Segment<'_>>, HiliteError> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut open: Option<usize> = None;

    for marker in MARKERS.find_iter(text) {
        let is_start = marker.pattern().as_usize() == START_PATTERN;
        match (is_start, open) {
            (true, None) => {
                push_nonempty(&mut segments, Segment::plain(&text[cursor..marker.start()]));
                open = Some(marker.end());
            }
            (true, Some(_)) => {
                return Err(HiliteError::MalformedDelimited(format!(
                    "nested start marker at byte {}",
                    marker.start()
                )));
            }
            (false, Some(start)) => {
                push_nonempty(&mut segments, Segment::matched(&text[start..marker.start()]));
                open = None;
            }
            (false, None) => {
                return Err(HiliteError::MalformedDelimited(format!(
                    "end marker without start at byte {}",
                    marker.start()
                )));
            }
        }
        cursor = marker.end();
    }

    if let Some(start) = open {
        return Err(HiliteError::MalformedDelimited(format!(
            "start marker at byte {} is never closed",
            start - MATCH_START.len()
        )));
    }

    push_nonempty(&mut segments, Segment::plain(&text[cursor..]));
    Ok(segments)
}

fn push_nonempty<'a>(segments: &mut Vec<Segment<'a>>, segment: Segment<'a>) {
    if !segment.text.is_empty() {
        segments.push(segment);
    }
}

#[cfg(test)]
#[path = "delimited_tests.rs"]
mod delimited_tests;
