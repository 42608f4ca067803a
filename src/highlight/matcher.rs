use std::ops::Range;

use memchr::memmem::Finder;

use super::culture::Culture;
use super::fold::{FoldedText, Folding};
use super::mode::ComparisonMode;

/// Left-to-right, non-overlapping occurrences of a term, as source byte ranges
#[derive(Debug)]
pub(crate) enum Matches<'a> {
    /// Byte search straight over the source, found lazily
    Ordinal {
        haystack: &'a str,
        finder: Finder<'static>,
        pos: usize,
    },
    /// Search through a folded view, also found lazily
    Folded(FoldedMatches),
    Empty,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(
        haystack: &'a str,
        term: &str,
        mode: ComparisonMode,
        culture: &Culture,
    ) -> Self {
        if haystack.is_empty() || term.is_empty() {
            return Matches::Empty;
        }

        match Folding::for_mode(mode, culture) {
            None => Matches::Ordinal {
                haystack,
                finder: Finder::new(term).into_owned(),
                pos: 0,
            },
            Some(folding) => {
                FoldedMatches::new(haystack, term, folding).map_or(Matches::Empty, Matches::Folded)
            }
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Matches::Ordinal {
                haystack,
                finder,
                pos,
            } => {
                let found = finder.find(&haystack.as_bytes()[*pos..])?;
                let start = *pos + found;
                let end = start + finder.needle().len();
                *pos = end;
                Some(start..end)
            }
            Matches::Folded(matches) => matches.next(),
            Matches::Empty => None,
        }
    }
}

/// Occurrences in a folded view, mapped back to the source one at a time.
///
/// The folded view is built up front; matching proceeds on demand.
#[derive(Debug)]
pub(crate) struct FoldedMatches {
    folded: FoldedText,
    finder: Finder<'static>,
    pos: usize,
}

impl FoldedMatches {
    /// `None` when the term folds to nothing
    fn new(haystack: &str, term: &str, folding: Folding) -> Option<Self> {
        let needle = folding.fold_str(term);
        if needle.is_empty() {
            return None;
        }

        let folded = FoldedText::new(haystack, folding);
        log::debug!(
            "searching {} folded bytes for {:?} with {:?}",
            folded.as_str().len(),
            term,
            folding
        );

        Some(Self {
            folded,
            finder: Finder::new(&needle).into_owned(),
            pos: 0,
        })
    }
}

impl Iterator for FoldedMatches {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.folded.as_str();
        let needle_len = self.finder.needle().len();

        while let Some(found) = self.finder.find(&text.as_bytes()[self.pos..]) {
            let start = self.pos + found;
            let end = start + needle_len;

            if self.folded.is_unit_boundary(start) && self.folded.is_unit_boundary(end) {
                self.pos = end;
                return Some(self.folded.source_range(start..end));
            }

            // Hit splits a unit; retry from the next codepoint
            let step = text[start..].chars().next().map_or(1, char::len_utf8);
            self.pos = start + step;
        }

        self.pos = text.len();
        None
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
