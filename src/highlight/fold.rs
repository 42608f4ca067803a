//! Folded views of text for the non-ordinal comparison modes.
//!
//! A folded view replaces every comparison unit of the source (a codepoint,
//! or a grapheme cluster for culture-aware modes) with its folded form and
//! remembers, per folded byte, which source unit it came from. Matches found
//! in the folded string are mapped back to byte ranges of the source.

use std::ops::Range;

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use super::culture::{CaseTailoring, Culture};
use super::mode::ComparisonMode;

/// Format characters that culture-aware comparison ignores
fn is_ignorable(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}'
    )
}

/// Transformation applied to each comparison unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Folding {
    /// Per codepoint simple uppercase mapping
    SimpleUpper,
    /// Per grapheme NFC with ignorables removed
    Canonical,
    /// `Canonical` followed by case folding
    CanonicalCaseless(CaseTailoring),
}

impl Folding {
    /// Folding for a mode, or `None` when the mode compares raw bytes
    pub(crate) fn for_mode(mode: ComparisonMode, culture: &Culture) -> Option<Self> {
        if !mode.is_culture_aware() {
            return mode.is_case_insensitive().then_some(Folding::SimpleUpper);
        }
        if !mode.is_case_insensitive() {
            return Some(Folding::Canonical);
        }

        let tailoring = if mode.is_invariant() {
            CaseTailoring::Default
        } else {
            culture.case_tailoring()
        };
        Some(Folding::CanonicalCaseless(tailoring))
    }

    fn works_on_graphemes(self) -> bool {
        !matches!(self, Folding::SimpleUpper)
    }

    /// Append the folded form of one unit to `out`
    fn fold_unit(self, unit: &str, out: &mut String) {
        match self {
            Folding::SimpleUpper => {
                for c in unit.chars() {
                    out.push(simple_upper(c));
                }
            }
            Folding::Canonical => {
                out.extend(unit.nfc().filter(|c| !is_ignorable(*c)));
            }
            Folding::CanonicalCaseless(tailoring) => {
                let canonical: String = unit.nfc().filter(|c| !is_ignorable(*c)).collect();
                fold_case(&canonical, tailoring, out);
            }
        }
    }

    /// Fold a whole string, as used for the search term
    pub(crate) fn fold_str(self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        if self.works_on_graphemes() {
            for grapheme in text.graphemes(true) {
                self.fold_unit(grapheme, &mut out);
            }
        } else {
            self.fold_unit(text, &mut out);
        }
        out
    }
}

/// Uppercase mapping that never changes the number of codepoints
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn fold_case(text: &str, tailoring: CaseTailoring, out: &mut String) {
    for c in text.chars() {
        match (tailoring, c) {
            (CaseTailoring::Turkic, 'I') => out.push('ı'),
            (CaseTailoring::Turkic, 'İ') => out.push('i'),
            (_, 'ß' | 'ẞ') => out.push_str("ss"),
            (_, 'ς') => out.push('σ'),
            _ => out.extend(c.to_lowercase()),
        }
    }
}

/// Folded copy of a source string with a map back to the source units.
///
/// Unit `i` covers `folded_starts[i]..folded_starts[i + 1]` of the folded
/// string and `source_starts[i]..source_starts[i + 1]` of the source. Both
/// tables end with an entry for the end of the text.
#[derive(Debug)]
pub(crate) struct FoldedText {
    folded: String,
    folded_starts: Vec<usize>,
    source_starts: Vec<usize>,
}

impl FoldedText {
    pub(crate) fn new(source: &str, folding: Folding) -> Self {
        let mut folded = String::with_capacity(source.len());
        let mut folded_starts = Vec::new();
        let mut source_starts = Vec::new();

        // Units that fold to nothing are absorbed by their neighbours
        let mut push_unit = |offset: usize, unit: &str| {
            folded_starts.push(folded.len());
            source_starts.push(offset);
            folding.fold_unit(unit, &mut folded);
        };

        if folding.works_on_graphemes() {
            for (offset, grapheme) in source.grapheme_indices(true) {
                push_unit(offset, grapheme);
            }
        } else {
            for (offset, c) in source.char_indices() {
                push_unit(offset, &source[offset..offset + c.len_utf8()]);
            }
        }

        folded_starts.push(folded.len());
        source_starts.push(source.len());

        log::trace!(
            "folded {} source bytes into {} bytes over {} units ({:?})",
            source.len(),
            folded.len(),
            folded_starts.len() - 1,
            folding
        );

        Self {
            folded,
            folded_starts,
            source_starts,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.folded
    }

    /// Whether a folded byte offset sits between two units
    pub(crate) fn is_unit_boundary(&self, offset: usize) -> bool {
        self.folded_starts.binary_search(&offset).is_ok()
    }

    /// Index of the non-empty unit containing a folded byte
    fn unit_at(&self, offset: usize) -> usize {
        self.folded_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Source range covered by a unit-aligned, non-empty folded range
    pub(crate) fn source_range(&self, folded: Range<usize>) -> Range<usize> {
        let first = self.unit_at(folded.start);
        let last = self.unit_at(folded.end - 1);
        self.source_starts[first]..self.source_starts[last + 1]
    }
}

#[cfg(test)]
#[path = "fold_tests.rs"]
mod fold_tests;
