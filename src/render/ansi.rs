use crossterm::style::{Attribute, Color, Stylize, style};

use crate::config::OutputConfig;
use crate::error::HiliteError;
use crate::highlight::Segment;

/// Terminal styling applied to matched segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiStyle {
    pub foreground: Color,
    pub background: Color,
}

impl Default for AnsiStyle {
    fn default() -> Self {
        Self {
            foreground: Color::Black,
            background: Color::Yellow,
        }
    }
}

impl AnsiStyle {
    pub fn from_config(config: &OutputConfig) -> Result<Self, HiliteError> {
        Ok(Self {
            foreground: parse_color(&config.foreground)?,
            background: parse_color(&config.background)?,
        })
    }
}

/// Parse a crossterm color name such as `yellow` or `dark_blue`
pub fn parse_color(name: &str) -> Result<Color, HiliteError> {
    Color::try_from(name.trim().to_lowercase().as_str())
        .map_err(|_| HiliteError::InvalidColor(name.to_string()))
}

/// Render segments for a terminal: plain text as-is, matches bold and colored
pub fn to_ansi<'a, I>(segments: I, ansi: &AnsiStyle) -> String
where
    I: IntoIterator<Item = Segment<'a>>,
{
    let mut out = String::new();
    for segment in segments {
        if segment.is_match {
            let styled = style(segment.text)
                .with(ansi.foreground)
                .on(ansi.background)
                .attribute(Attribute::Bold);
            out.push_str(&styled.to_string());
        } else {
            out.push_str(segment.text);
        }
    }
    out
}

#[cfg(test)]
#[path = "ansi_tests.rs"]
mod ansi_tests;
