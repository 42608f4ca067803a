//! Highlight module
//!
//! Splits a source text into plain and matched segments for a search term.
//! Concatenating the segments in order always reproduces the source.

mod culture;
mod fold;
mod matcher;
mod mode;
mod segment;

pub use culture::{CaseTailoring, Culture, DEFAULT_CULTURE};
pub use mode::ComparisonMode;
pub use segment::{Segment, Segments};

use matcher::Matches;

/// Segment `source` around every occurrence of `term`.
///
/// Culture-aware modes use the default culture (`en-US`); use
/// [`Highlighter::with_culture`] to pick another one.
pub fn highlight<'a>(source: &'a str, term: &str, mode: ComparisonMode) -> Segments<'a> {
    Highlighter::new(mode).segments(source, term)
}

/// Comparison settings reused across many texts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighter {
    mode: ComparisonMode,
    culture: Culture,
}

impl Highlighter {
    pub fn new(mode: ComparisonMode) -> Self {
        Self {
            mode,
            culture: Culture::default(),
        }
    }

    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = culture;
        self
    }

    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    pub fn segments<'a>(&self, source: &'a str, term: &str) -> Segments<'a> {
        Segments::new(source, Matches::new(source, term, self.mode, &self.culture))
    }

    /// Number of occurrences of `term` in `source`
    pub fn count(&self, source: &str, term: &str) -> usize {
        Matches::new(source, term, self.mode, &self.culture).count()
    }
}

/// A single highlighting call: source, term and how to compare them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightRequest {
    pub source_text: String,
    pub term: String,
    pub mode: ComparisonMode,
    pub culture: Culture,
}

impl HighlightRequest {
    pub fn new(
        source_text: impl Into<String>,
        term: impl Into<String>,
        mode: ComparisonMode,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            term: term.into(),
            mode,
            culture: Culture::default(),
        }
    }

    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = culture;
        self
    }

    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new(self.mode).with_culture(self.culture.clone())
    }

    pub fn segments(&self) -> Segments<'_> {
        self.highlighter().segments(&self.source_text, &self.term)
    }
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
