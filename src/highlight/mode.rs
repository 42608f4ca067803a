use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::HiliteError;

/// How occurrences of a term are compared against the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ComparisonMode {
    /// Exact codepoint equality
    Ordinal,
    /// Codepoint equality after simple uppercase mapping
    #[default]
    OrdinalIgnoreCase,
    /// Canonical-equivalence matching on grapheme clusters, using the request culture
    CultureSensitive,
    /// As `CultureSensitive`, with case folding tailored to the request culture
    CultureSensitiveIgnoreCase,
    /// Canonical-equivalence matching with no culture tailoring
    InvariantCulture,
    /// As `InvariantCulture`, with untailored case folding
    InvariantCultureIgnoreCase,
}

impl ComparisonMode {
    pub const ALL: [ComparisonMode; 6] = [
        ComparisonMode::Ordinal,
        ComparisonMode::OrdinalIgnoreCase,
        ComparisonMode::CultureSensitive,
        ComparisonMode::CultureSensitiveIgnoreCase,
        ComparisonMode::InvariantCulture,
        ComparisonMode::InvariantCultureIgnoreCase,
    ];

    /// Canonical kebab-case name, accepted back by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            ComparisonMode::Ordinal => "ordinal",
            ComparisonMode::OrdinalIgnoreCase => "ordinal-ignore-case",
            ComparisonMode::CultureSensitive => "culture-sensitive",
            ComparisonMode::CultureSensitiveIgnoreCase => "culture-sensitive-ignore-case",
            ComparisonMode::InvariantCulture => "invariant-culture",
            ComparisonMode::InvariantCultureIgnoreCase => "invariant-culture-ignore-case",
        }
    }

    pub fn is_case_insensitive(self) -> bool {
        matches!(
            self,
            ComparisonMode::OrdinalIgnoreCase
                | ComparisonMode::CultureSensitiveIgnoreCase
                | ComparisonMode::InvariantCultureIgnoreCase
        )
    }

    /// Whether matching works on normalized grapheme clusters rather than codepoints
    pub fn is_culture_aware(self) -> bool {
        !matches!(
            self,
            ComparisonMode::Ordinal | ComparisonMode::OrdinalIgnoreCase
        )
    }

    pub fn is_invariant(self) -> bool {
        matches!(
            self,
            ComparisonMode::InvariantCulture | ComparisonMode::InvariantCultureIgnoreCase
        )
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComparisonMode {
    type Err = HiliteError;

    /// Accepts the kebab-case names as well as the PascalCase names used by
    /// .NET `StringComparison` (`CurrentCulture` maps to `CultureSensitive`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "ordinal" => Ok(ComparisonMode::Ordinal),
            "ordinalignorecase" => Ok(ComparisonMode::OrdinalIgnoreCase),
            "culturesensitive" | "culture" | "currentculture" => {
                Ok(ComparisonMode::CultureSensitive)
            }
            "culturesensitiveignorecase" | "cultureignorecase" | "currentcultureignorecase" => {
                Ok(ComparisonMode::CultureSensitiveIgnoreCase)
            }
            "invariantculture" | "invariant" => Ok(ComparisonMode::InvariantCulture),
            "invariantcultureignorecase" | "invariantignorecase" => {
                Ok(ComparisonMode::InvariantCultureIgnoreCase)
            }
            _ => Err(HiliteError::UnknownComparisonMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for ComparisonMode {
    type Error = HiliteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod mode_tests;
