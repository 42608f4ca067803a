use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::HiliteError;

/// Culture used when none is given, matching the bundled English samples
pub const DEFAULT_CULTURE: &str = "en-US";

/// Case mapping rules that differ between cultures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTailoring {
    /// Unicode default case mapping
    Default,
    /// Turkish and Azerbaijani dotted/dotless I
    Turkic,
}

/// A culture identifier such as `en-US` or `es-ES`.
///
/// Only the language subtag affects matching; the full tag is kept for
/// display. The empty tag (or `invariant`) is the invariant culture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Culture {
    tag: String,
}

impl Culture {
    pub fn invariant() -> Self {
        Self { tag: String::new() }
    }

    pub fn is_invariant(&self) -> bool {
        self.tag.is_empty()
    }

    /// Normalized tag, empty for the invariant culture
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Lowercase primary language subtag, empty for the invariant culture
    pub fn language(&self) -> &str {
        self.tag.split('-').next().unwrap_or("")
    }

    pub fn case_tailoring(&self) -> CaseTailoring {
        match self.language() {
            "tr" | "az" => CaseTailoring::Turkic,
            _ => CaseTailoring::Default,
        }
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self {
            tag: DEFAULT_CULTURE.to_string(),
        }
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            f.write_str("invariant")
        } else {
            f.write_str(&self.tag)
        }
    }
}

impl FromStr for Culture {
    type Err = HiliteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("invariant") {
            return Ok(Culture::invariant());
        }

        let invalid = || HiliteError::InvalidCulture(s.to_string());
        let mut subtags = trimmed.split(['-', '_']);

        let language = subtags.next().ok_or_else(invalid)?;
        if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let mut tag = language.to_ascii_lowercase();
        for subtag in subtags {
            if !(1..=8).contains(&subtag.len())
                || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(invalid());
            }
            tag.push('-');
            // Two-letter regions are conventionally uppercase ("en-US")
            if subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
                tag.push_str(&subtag.to_ascii_uppercase());
            } else {
                tag.push_str(subtag);
            }
        }

        Ok(Culture { tag })
    }
}

impl TryFrom<String> for Culture {
    type Error = HiliteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
#[path = "culture_tests.rs"]
mod culture_tests;
