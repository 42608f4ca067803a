// Configuration type definitions

use serde::Deserialize;

use crate::highlight::{ComparisonMode, Culture};
use crate::render::OutputFormat;

/// Matching configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct HighlightConfig {
    #[serde(default)]
    pub mode: ComparisonMode,
    #[serde(default)]
    pub culture: Culture,
}

/// Markup output configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkupConfig {
    /// CSS class put on `<mark>` elements
    #[serde(default = "default_markup_class")]
    pub class: String,
}

fn default_markup_class() -> String {
    "highlight".to_string()
}

impl Default for MarkupConfig {
    fn default() -> Self {
        MarkupConfig {
            class: default_markup_class(),
        }
    }
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Terminal color names for matched text
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_foreground() -> String {
    "black".to_string()
}

fn default_background() -> String {
    "yellow".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::default(),
            foreground: default_foreground(),
            background: default_background(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub markup: MarkupConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
