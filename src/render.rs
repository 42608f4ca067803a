//! Render module
//!
//! Adapters that turn a segment sequence into something displayable. Each is
//! a thin mapping over segments; none of them searches text.

pub mod ansi;
pub mod delimited;
pub mod json;
pub mod markup;

use clap::ValueEnum;
use serde::Deserialize;

use crate::config::Config;
use crate::error::HiliteError;
use crate::highlight::Segment;

/// Output representation of highlighted text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal colors
    #[default]
    Ansi,
    /// `|~S~|match|~E~|` delimiters
    Delimited,
    /// Escaped HTML with `<mark>` elements
    Markup,
    /// JSON array of `{ "text", "is_match" }` objects
    Json,
}

/// Render segments in the given format, styled per the configuration
pub fn render<'a, I>(
    segments: I,
    format: OutputFormat,
    config: &Config,
) -> Result<String, HiliteError>
where
    I: IntoIterator<Item = Segment<'a>>,
{
    match format {
        OutputFormat::Ansi => {
            let style = ansi::AnsiStyle::from_config(&config.output)?;
            Ok(ansi::to_ansi(segments, &style))
        }
        OutputFormat::Delimited => Ok(delimited::encode(segments)),
        OutputFormat::Markup => Ok(markup::to_markup(segments, &config.markup)),
        OutputFormat::Json => json::to_json(segments),
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
