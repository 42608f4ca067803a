use std::iter::FusedIterator;
use std::ops::Range;

use serde::Serialize;

use super::matcher::Matches;

/// A contiguous span of the source text, tagged as matching the term or not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Segment<'a> {
    /// Source text of the span, with its original casing
    pub text: &'a str,
    /// Whether the span is an occurrence of the term
    pub is_match: bool,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }

    pub fn matched(text: &'a str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }
}

/// Lazy sequence of segments covering a source text without gaps or overlaps.
///
/// Never yields an empty segment.
#[derive(Debug)]
pub struct Segments<'a> {
    source: &'a str,
    matches: Matches<'a>,
    cursor: usize,
    /// Match found while emitting the plain span before it
    pending: Option<Range<usize>>,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(source: &'a str, matches: Matches<'a>) -> Self {
        Self {
            source,
            matches,
            cursor: 0,
            pending: None,
        }
    }

    fn emit_match(&mut self, range: Range<usize>) -> Segment<'a> {
        let source = self.source;
        self.cursor = range.end;
        Segment::matched(&source[range])
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(range) = self.pending.take() {
            return Some(self.emit_match(range));
        }

        let source = self.source;
        match self.matches.next() {
            Some(range) if range.start > self.cursor => {
                let plain = Segment::plain(&source[self.cursor..range.start]);
                self.cursor = range.start;
                self.pending = Some(range);
                Some(plain)
            }
            Some(range) => Some(self.emit_match(range)),
            None if self.cursor < source.len() => {
                let tail = Segment::plain(&source[self.cursor..]);
                self.cursor = source.len();
                Some(tail)
            }
            None => None,
        }
    }
}

impl FusedIterator for Segments<'_> {}
